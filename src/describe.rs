//! # Value Formatter
//!
//! Turns assertion operands into the text shown in reports. Scalars use their `Display`
//! form; sequences are the `", "`-joined descriptions of their elements.
//!
//! Implementing [`Describe`] for a type is the one customization hook the harness offers.
//! [`describe_with_display!`](crate::describe_with_display) and
//! [`describe_with_debug!`](crate::describe_with_debug) cover the common cases.

use std::collections::VecDeque;

/// Textual representation of a value for reports.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Joins the descriptions of `items` with `", "`, without a trailing separator.
pub fn describe_sequence<'a, T, I>(items: I) -> String
where
    T: Describe + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Implements [`Describe`] through the type's `Display` implementation.
#[macro_export]
macro_rules! describe_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

/// Implements [`Describe`] through the type's `Debug` implementation.
///
/// ```rust
/// use utest::{describe_with_debug, Describe};
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
/// describe_with_debug!(Point);
///
/// assert_eq!(Point { x: 1, y: 2 }.describe(), "Point { x: 1, y: 2 }");
/// ```
#[macro_export]
macro_rules! describe_with_debug {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

describe_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> String {
        describe_sequence(self)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self) -> String {
        describe_sequence(self)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> String {
        describe_sequence(self)
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(&self) -> String {
        describe_sequence(self)
    }
}
