//! Harness-level errors.
//!
//! An assertion that evaluates false is not an error in this sense: it is counted by the
//! owning fixture and the run carries on. The variants here describe misuse of the harness
//! itself (unbalanced sections) and failures of the report stream.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// A section push was refused because the stack is full.
    #[error("cannot enter section '{name}': section stack is limited to {capacity} levels")]
    SectionOverflow { name: String, capacity: usize },

    /// A section pop was refused because only the root remains.
    #[error("cannot leave section: already at the root section")]
    SectionUnderflow,

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
