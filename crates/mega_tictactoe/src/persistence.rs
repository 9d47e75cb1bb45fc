//! Save sinks.

use crate::error::SaveError;
use crate::snapshot::Snapshot;

/// Somewhere snapshots can be written under a name.
///
/// Implementations report failure; callers must not assume a save worked.
pub trait SaveSink: Send + Sync {
    /// Persists `snapshot` as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the snapshot could not be stored.
    fn save(&self, name: &str, snapshot: &Snapshot) -> Result<(), SaveError>;
}
