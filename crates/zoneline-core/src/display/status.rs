//! Status messages for operation feedback.

use std::fmt;

/// One-line outcome of a mutating operation.
///
/// "Rejected" covers the defensive no-ops (duplicate add, full list, bad
/// index, stale pattern): the operation completed without error but changed
/// nothing, and the message says why.
pub struct OperationStatus {
    pub message: String,
    pub applied: bool,
}

impl OperationStatus {
    /// The operation changed the stored state.
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    /// The operation was a defensive no-op.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied {
            writeln!(f, "{}", self.message)
        } else {
            writeln!(f, "No change: {}", self.message)
        }
    }
}
