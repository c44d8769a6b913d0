use crate::domain::model::Address;
use crate::utils::error::Result;

/// Persistence port for [`Address`] records keyed by their `i64` surrogate id.
///
/// Semantics shared by every backend:
/// - `save` inserts when `id` is `None` (assigning the next sequence value)
///   and upserts when `id` is `Some`; the returned entity carries the id as
///   stored.
/// - lookups never fail on a missing id; they return `None` / `false` / an
///   empty subset.
/// - deletes are idempotent: a missing record is a silent no-op.
/// - `find_all` makes no ordering guarantee.
///
/// Backend failures (I/O, serialization) are propagated unchanged.
#[async_trait::async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, address: Address) -> Result<Address>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    async fn find_all(&self) -> Result<Vec<Address>>;

    /// Returns the subset of the requested ids that exist.
    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Address>>;

    async fn count(&self) -> Result<u64>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// No-op when the entity has no id or the id is not stored.
    async fn delete(&self, address: &Address) -> Result<()>;

    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<()>;

    async fn delete_entities(&self, addresses: &[Address]) -> Result<()>;

    /// Removes every stored record.
    async fn delete_all(&self) -> Result<()>;
}
