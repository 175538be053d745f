//! # Sections
//!
//! A fixture owns a bounded stack of section names. The names from the root down to the
//! top form the path printed above the assertions that run inside it, e.g.
//! `main.containers.empty`.
//!
//! Sections are entered through [`Checker::section`], which returns a [`Section`] guard.
//! The guard pops the name when it goes out of scope, whichever way the scope is left.

use std::ops::{Deref, DerefMut};

use log::warn;

use crate::check::Checker;
use crate::error::{HarnessError, HarnessResult};

/// Name of the implicit section at depth 0.
pub const ROOT_SECTION: &str = "main";

/// Separator used when rendering a section path.
pub const PATH_SEPARATOR: &str = ".";

// ============================================================================
// SECTION STACK
// ============================================================================

/// Bounded stack of section names with a memoized path rendering.
#[derive(Debug, Clone)]
pub struct SectionStack {
    names: Vec<String>,
    changed: bool,
    stale: bool,
    rendered: String,
}

impl SectionStack {
    /// Maximum number of levels, root included.
    pub const CAPACITY: usize = 32;

    pub fn new() -> Self {
        let mut names = Vec::with_capacity(Self::CAPACITY);
        names.push(ROOT_SECTION.to_string());
        Self {
            names,
            changed: true,
            stale: false,
            rendered: ROOT_SECTION.to_string(),
        }
    }

    /// Current depth; the root alone is depth 0.
    pub fn depth(&self) -> usize {
        self.names.len() - 1
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the stack was pushed or popped since the path was last taken.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn push(&mut self, name: impl Into<String>) -> HarnessResult<()> {
        let name = name.into();
        if self.names.len() >= Self::CAPACITY {
            return Err(HarnessError::SectionOverflow {
                name,
                capacity: Self::CAPACITY,
            });
        }
        self.names.push(name);
        self.changed = true;
        self.stale = true;
        Ok(())
    }

    pub fn pop(&mut self) -> HarnessResult<()> {
        if self.names.len() <= 1 {
            return Err(HarnessError::SectionUnderflow);
        }
        self.names.pop();
        self.changed = true;
        self.stale = true;
        Ok(())
    }

    /// The current path, re-rendered only if the stack changed since it was last rendered.
    pub fn path(&mut self) -> &str {
        if self.stale {
            self.rendered = self.names.join(PATH_SEPARATOR);
            self.stale = false;
        }
        &self.rendered
    }

    /// Returns the path if it changed since the previous call, clearing the flag.
    pub fn take_changed_path(&mut self) -> Option<String> {
        if !self.changed {
            return None;
        }
        let path = self.path().to_string();
        self.changed = false;
        Some(path)
    }
}

impl Default for SectionStack {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SCOPED GUARD
// ============================================================================

/// An entered section. Derefs to the [`Checker`] so assertions and nested sections are
/// issued through it; leaving the scope pops the section.
pub struct Section<'c, 'a> {
    checker: &'c mut Checker<'a>,
    entered: bool,
}

impl<'c, 'a> Section<'c, 'a> {
    pub(crate) fn enter(checker: &'c mut Checker<'a>, name: &str) -> Self {
        let entered = match checker.sections_mut().push(name) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        };
        Self { checker, entered }
    }

    /// False when the push was refused; assertions still run under the parent section.
    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

impl<'a> Deref for Section<'_, 'a> {
    type Target = Checker<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.checker
    }
}

impl<'a> DerefMut for Section<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.checker
    }
}

impl Drop for Section<'_, '_> {
    fn drop(&mut self) {
        if !self.entered {
            return;
        }
        if let Err(e) = self.checker.sections_mut().pop() {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_includes_root() {
        let mut stack = SectionStack::new();
        stack.push("outer").unwrap();
        stack.push("inner").unwrap();
        assert_eq!(stack.path(), "main.outer.inner");
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_changed_path_is_taken_once() {
        let mut stack = SectionStack::new();
        assert_eq!(stack.take_changed_path().as_deref(), Some("main"));
        assert_eq!(stack.take_changed_path(), None);
        stack.push("a").unwrap();
        assert_eq!(stack.take_changed_path().as_deref(), Some("main.a"));
        assert_eq!(stack.take_changed_path(), None);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut stack = SectionStack::new();
        for i in 1..SectionStack::CAPACITY {
            stack.push(format!("s{}", i)).unwrap();
        }
        assert!(matches!(
            stack.push("overflow"),
            Err(HarnessError::SectionOverflow { capacity: 32, .. })
        ));
        assert_eq!(stack.depth(), SectionStack::CAPACITY - 1);
    }

    #[test]
    fn test_root_cannot_be_popped() {
        let mut stack = SectionStack::new();
        assert!(matches!(stack.pop(), Err(HarnessError::SectionUnderflow)));
        assert_eq!(stack.depth(), 0);
    }
}
