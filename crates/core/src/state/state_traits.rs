use crate::errors::Result;

/// Trait for the opaque blob store that holds the serialized game state.
///
/// Implementations are synchronous; every engine operation completes its
/// save before returning.
pub trait StateRepositoryTrait: Send + Sync {
    /// Returns the blob stored under `storage_key`, if any.
    fn load_state(&self, storage_key: &str) -> Result<Option<String>>;

    /// Overwrites the blob stored under `storage_key`.
    fn save_state(&self, storage_key: &str, blob: &str) -> Result<()>;

    /// Removes the blob. Returns whether anything was stored.
    fn delete_state(&self, storage_key: &str) -> Result<bool>;
}
