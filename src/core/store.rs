use crate::core::AddressRepository;
use crate::domain::model::Address;
use crate::utils::error::Result;

/// Thin façade over any [`AddressRepository`] backend. Adds tracing around
/// each operation and nothing else; semantics and failures pass through
/// untouched.
pub struct AddressStore<R: AddressRepository> {
    repository: R,
}

impl<R: AddressRepository> AddressStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn save(&self, address: Address) -> Result<Address> {
        let saved = self.repository.save(address).await?;
        tracing::debug!(id = saved.id, "saved address");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Address>> {
        let found = self.repository.find_by_id(id).await?;
        tracing::debug!(id, hit = found.is_some(), "find_by_id");
        Ok(found)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Address>> {
        let all = self.repository.find_all().await?;
        tracing::debug!(count = all.len(), "find_all");
        Ok(all)
    }

    pub async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Address>> {
        let found = self.repository.find_all_by_id(ids).await?;
        tracing::debug!(
            requested = ids.len(),
            found = found.len(),
            "find_all_by_id"
        );
        Ok(found)
    }

    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        tracing::debug!(id, "deleted address");
        Ok(())
    }

    pub async fn delete(&self, address: &Address) -> Result<()> {
        self.repository.delete(address).await
    }

    pub async fn delete_all_by_id(&self, ids: &[i64]) -> Result<()> {
        self.repository.delete_all_by_id(ids).await
    }

    pub async fn delete_entities(&self, addresses: &[Address]) -> Result<()> {
        self.repository.delete_entities(addresses).await
    }

    pub async fn delete_all(&self) -> Result<()> {
        self.repository.delete_all().await?;
        tracing::debug!("cleared all addresses");
        Ok(())
    }
}
