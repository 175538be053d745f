//! # Comparator
//!
//! Evaluates one of six relations between two operands. Scalars delegate to the native
//! operator; sequences are walked in lock-step and every element pair must satisfy the
//! *same* relation.
//!
//! ## Length rule
//!
//! When one sequence runs out before the other the comparison is `false`, whatever the
//! relation. `[1, 2, 3] > [0, 1]` is therefore `false`. This is not a lexicographic
//! ordering and reports depend on it.
//!
//! ## Extending
//!
//! Implement [`Compare`] for a custom type, or use [`scalar_compare!`](crate::scalar_compare)
//! for types that already implement `PartialOrd`.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

// ============================================================================
// RELATION
// ============================================================================

/// A binary relation applied by an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::Greater,
        Relation::GreaterOrEqual,
        Relation::Less,
        Relation::LessOrEqual,
    ];

    /// The operator as it would appear in source.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::Greater => ">",
            Relation::GreaterOrEqual => ">=",
            Relation::Less => "<",
            Relation::LessOrEqual => "<=",
        }
    }

    /// The relation that holds between two totally ordered scalars when this one does not.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Equal => Relation::NotEqual,
            Relation::NotEqual => Relation::Equal,
            Relation::Greater => Relation::LessOrEqual,
            Relation::GreaterOrEqual => Relation::Less,
            Relation::Less => Relation::GreaterOrEqual,
            Relation::LessOrEqual => Relation::Greater,
        }
    }

    /// Applies the native operator for this relation.
    #[inline]
    pub fn evaluate<L, R>(self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Relation::Equal => left == right,
            Relation::NotEqual => left != right,
            Relation::Greater => left > right,
            Relation::GreaterOrEqual => left >= right,
            Relation::Less => left < right,
            Relation::LessOrEqual => left <= right,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// COMPARE TRAIT
// ============================================================================

/// Relation-aware comparison between `Self` and `Rhs`.
///
/// Comparison never mutates either operand.
pub trait Compare<Rhs: ?Sized = Self> {
    fn compare(&self, rhs: &Rhs, relation: Relation) -> bool;
}

/// Evaluates `left relation right`, recursing into sequences.
#[inline]
pub fn compare<L, R>(left: &L, right: &R, relation: Relation) -> bool
where
    L: Compare<R> + ?Sized,
    R: ?Sized,
{
    left.compare(right, relation)
}

/// Walks two sequences in lock-step, applying `relation` to every element pair.
///
/// Stops at the first failing pair. If one side is exhausted before the other the result
/// is `false`; two empty sequences compare `true` for every relation.
pub fn compare_sequences<'l, 'r, L, R, I, J>(left: I, right: J, relation: Relation) -> bool
where
    L: Compare<R> + ?Sized + 'l,
    R: ?Sized + 'r,
    I: IntoIterator<Item = &'l L>,
    J: IntoIterator<Item = &'r R>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                if !l.compare(r, relation) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

// ============================================================================
// SCALAR IMPLEMENTATIONS
// ============================================================================

/// Implements [`Compare`] for types whose relations are their native `PartialOrd`
/// operators.
///
/// ```rust
/// use utest::{compare, scalar_compare, Relation};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Meters(f64);
/// scalar_compare!(Meters);
///
/// assert!(compare(&Meters(2.0), &Meters(1.0), Relation::Greater));
/// ```
#[macro_export]
macro_rules! scalar_compare {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Compare for $ty {
                #[inline]
                fn compare(&self, rhs: &$ty, relation: $crate::Relation) -> bool {
                    relation.evaluate(self, rhs)
                }
            }
        )*
    };
}

scalar_compare!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl Compare<str> for String {
    fn compare(&self, rhs: &str, relation: Relation) -> bool {
        relation.evaluate(self.as_str(), rhs)
    }
}

impl Compare<&str> for String {
    fn compare(&self, rhs: &&str, relation: Relation) -> bool {
        relation.evaluate(self.as_str(), *rhs)
    }
}

impl Compare<String> for str {
    fn compare(&self, rhs: &String, relation: Relation) -> bool {
        relation.evaluate(self, rhs.as_str())
    }
}

impl Compare<String> for &str {
    fn compare(&self, rhs: &String, relation: Relation) -> bool {
        relation.evaluate(*self, rhs.as_str())
    }
}

impl<'a, 'b, L, R> Compare<&'b R> for &'a L
where
    L: Compare<R> + ?Sized,
    R: ?Sized,
{
    #[inline]
    fn compare(&self, rhs: &&'b R, relation: Relation) -> bool {
        (**self).compare(*rhs, relation)
    }
}

// ============================================================================
// SEQUENCE IMPLEMENTATIONS
// ============================================================================

macro_rules! sequence_compare {
    ($([$($generics:tt)*] $lhs:ty => $rhs:ty;)*) => {
        $(
            impl<$($generics)*> Compare<$rhs> for $lhs
            where
                T: Compare<U>,
            {
                fn compare(&self, rhs: &$rhs, relation: Relation) -> bool {
                    compare_sequences(self.iter(), rhs.iter(), relation)
                }
            }
        )*
    };
}

sequence_compare! {
    [T, U] Vec<T> => Vec<U>;
    [T, U] Vec<T> => [U];
    [T, U, const N: usize] Vec<T> => [U; N];
    [T, U] Vec<T> => VecDeque<U>;
    [T, U] [T] => Vec<U>;
    [T, U] [T] => [U];
    [T, U, const N: usize] [T] => [U; N];
    [T, U] [T] => VecDeque<U>;
    [T, U, const N: usize] [T; N] => Vec<U>;
    [T, U, const N: usize] [T; N] => [U];
    [T, U, const N: usize, const M: usize] [T; N] => [U; M];
    [T, U, const N: usize] [T; N] => VecDeque<U>;
    [T, U] VecDeque<T> => Vec<U>;
    [T, U] VecDeque<T> => [U];
    [T, U, const N: usize] VecDeque<T> => [U; N];
    [T, U] VecDeque<T> => VecDeque<U>;
}
