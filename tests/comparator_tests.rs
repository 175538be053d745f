//! Comparator and value formatter properties.

use std::collections::VecDeque;

use utest::{compare, Describe, Relation};

#[cfg(test)]
mod scalar_tests {
    use super::*;

    fn native(a: i64, b: i64, relation: Relation) -> bool {
        match relation {
            Relation::Equal => a == b,
            Relation::NotEqual => a != b,
            Relation::Greater => a > b,
            Relation::GreaterOrEqual => a >= b,
            Relation::Less => a < b,
            Relation::LessOrEqual => a <= b,
        }
    }

    #[test]
    fn test_scalars_match_native_operators() {
        let samples = [-3i64, 0, 1, 23, 29];
        for &a in &samples {
            for &b in &samples {
                for relation in Relation::ALL {
                    assert_eq!(
                        compare(&a, &b, relation),
                        native(a, b, relation),
                        "{} {} {}",
                        a,
                        relation,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_strings_compare_across_owned_and_borrowed() {
        let owned = String::from("apple");
        assert!(compare(&owned, &"apple", Relation::Equal));
        assert!(compare(&owned, "banana", Relation::Less));
        assert!(compare(&"cherry", &owned, Relation::Greater));
        assert!(compare("apple", &owned, Relation::GreaterOrEqual));
    }

    #[test]
    fn test_floats_and_chars() {
        assert!(compare(&0.5f64, &0.25, Relation::Greater));
        assert!(compare(&'a', &'b', Relation::Less));
        assert!(compare(&true, &false, Relation::NotEqual));
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn test_equal_length_sequences_compare_elementwise() {
        let vector = vec![1, 2, 3];
        assert!(compare(&vector, &[1, 2, 3], Relation::Equal));
        assert!(!compare(&vector, &[1, 2, 1928], Relation::Equal));
        assert!(compare(&vector, &[0, 1, 2], Relation::Greater));
        assert!(!compare(&vector, &[0, 5, 2], Relation::Greater));
    }

    #[test]
    fn test_length_mismatch_fails_every_relation() {
        let longer = vec![1, 2, 3];
        let shorter = [1, 2];
        for relation in Relation::ALL {
            assert!(!compare(&longer, &shorter, relation), "{}", relation);
            assert!(!compare(&shorter, &longer, relation), "{}", relation);
        }
    }

    #[test]
    fn test_empty_sequences_hold_for_every_relation() {
        let left: Vec<i32> = Vec::new();
        let right: [i32; 0] = [];
        for relation in Relation::ALL {
            assert!(compare(&left, &right, relation));
        }
    }

    #[test]
    fn test_not_equal_requires_every_pair_to_differ() {
        // elementwise: one equal pair is enough to fail `!=`
        assert!(!compare(&vec![1, 2], &vec![1, 3], Relation::NotEqual));
        assert!(compare(&vec![1, 2], &vec![4, 3], Relation::NotEqual));
    }

    #[test]
    fn test_mixed_containers_and_nesting() {
        let deque: VecDeque<i32> = (1..=3).collect();
        assert!(compare(&deque, &vec![1, 2, 3], Relation::Equal));
        assert!(compare(&[1, 2, 3][..], &deque, Relation::LessOrEqual));

        let nested = vec![vec![1, 2], vec![3, 4]];
        assert!(compare(&nested, &[[1, 2], [3, 4]], Relation::Equal));
        assert!(!compare(&nested, &vec![vec![1, 2], vec![3]], Relation::Equal));
    }
}

#[cfg(test)]
mod describe_tests {
    use super::*;

    struct Celsius(i32);

    impl Describe for Celsius {
        fn describe(&self) -> String {
            format!("{}°C", self.0)
        }
    }

    #[test]
    fn test_scalars_use_display() {
        assert_eq!(42i32.describe(), "42");
        assert_eq!(2.5f64.describe(), "2.5");
        assert_eq!("text".describe(), "text");
        assert_eq!('x'.describe(), "x");
    }

    #[test]
    fn test_sequences_are_comma_joined() {
        assert_eq!(vec![1, 2, 1928].describe(), "1, 2, 1928");
        assert_eq!(["a", "b"].describe(), "a, b");
    }

    #[test]
    fn test_custom_describe_overrides_elements() {
        assert_eq!(vec![Celsius(3), Celsius(-1)].describe(), "3°C, -1°C");
    }
}
