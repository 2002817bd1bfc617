//! Structural self-checks for welding results.
//!
//! [`UniqueRegistry`](crate::weld::registry::UniqueRegistry),
//! [`Dedup`](crate::weld::dedup::Dedup) and
//! [`IndexedGeometry`](crate::weld::indexed::IndexedGeometry) implement
//! [`DebugInvariants`]. Passes assert the invariants on their output in debug
//! builds, and in release builds when the `check-invariants` feature is on.

use crate::mesh_error::MeshWeldError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshWeldError>;

    /// Panic on the first violation when invariant checking is enabled;
    /// no-op otherwise.
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {} invalid: {e}", std::any::type_name::<Self>());
        }
    }

    /// Returns `self` if it validates, the violation otherwise.
    fn checked(self) -> Result<Self, MeshWeldError>
    where
        Self: Sized,
    {
        self.validate_invariants()?;
        Ok(self)
    }
}

/// Shorthand for building an [`MeshWeldError::InvariantViolation`].
pub(crate) fn violation(message: impl Into<String>) -> MeshWeldError {
    MeshWeldError::InvariantViolation(message.into())
}
