// Demonstration program: one fixture, two sections, five failing cases.
// Usage: cargo run --bin utest-example -- --verbosity everything

use utest::prelude::*;

fn main() {
    let mut registry = Registry::new();

    registry.register("basic", "demo", |t| {
        {
            let mut s = t.section("integers");
            let value = 23;

            // every relation against the same pair
            check_eq!(s, value, 29);
            check_ne!(s, value, 29);
            check_ge!(s, value, 29);
            check_gt!(s, value, 29);
            check_le!(s, value, 29);
            check_lt!(s, value, 29);
        }

        t.in_section("containers", |t| {
            // sequences compare element by element
            let vector = vec![1, 2, 3];
            check_eq!(t, vector, [1, 2]);
            check_eq!(t, vector, [1, 2, 3]);
            check_eq!(t, vector, [1, 2, 1928]);
        });
    });

    utest::cli::main(registry);
}
