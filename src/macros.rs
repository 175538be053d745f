//! Assertion macros.
//!
//! Each macro takes a checker (or an entered section), then the two operands. The operand
//! source text becomes the label shown in reports and the macro call site becomes the
//! reported location.
//!
//! ```rust
//! use utest::{check_eq, check_lt, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register("math", "ordering", |t| {
//!     let values = vec![1, 2, 3];
//!     check_eq!(t, values, [1, 2, 3]);
//!     check_lt!(t, values[0], values[2]);
//! });
//! ```

/// Shared expansion of the relation macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __check_relation {
    ($checker:expr, $relation:ident, $left:expr, $right:expr) => {
        $checker.check(
            $crate::Relation::$relation,
            &$left,
            &$right,
            stringify!($left),
            stringify!($right),
        )
    };
}

/// Checks `left == right`.
#[macro_export]
macro_rules! check_eq {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, Equal, $left, $right)
    };
}

/// Checks `left != right`.
#[macro_export]
macro_rules! check_ne {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, NotEqual, $left, $right)
    };
}

/// Checks `left > right`.
#[macro_export]
macro_rules! check_gt {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, Greater, $left, $right)
    };
}

/// Checks `left >= right`.
#[macro_export]
macro_rules! check_ge {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, GreaterOrEqual, $left, $right)
    };
}

/// Checks `left < right`.
#[macro_export]
macro_rules! check_lt {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, Less, $left, $right)
    };
}

/// Checks `left <= right`.
#[macro_export]
macro_rules! check_le {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__check_relation!($checker, LessOrEqual, $left, $right)
    };
}
