use crate::domain::model::Address;
use crate::domain::ports::AddressRepository;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Process-local backend. Records live in a `HashMap` keyed by id; the id
/// sequence is a separate atomic so concurrent saves never hand out the same
/// key.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<HashMap<i64, Address>>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Keeps the sequence ahead of any explicitly assigned id.
    fn advance_sequence(&self, id: i64) {
        self.next_id.fetch_max(id, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl AddressRepository for InMemoryRepository {
    async fn save(&self, mut address: Address) -> Result<Address> {
        let id = match address.id {
            Some(id) => {
                self.advance_sequence(id);
                id
            }
            None => self.allocate_id(),
        };
        address.id = Some(id);

        let mut records = self.records.write().await;
        records.insert(id, address.clone());
        Ok(address)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let records = self.records.read().await;
        Ok(records.contains_key(&id))
    }

    async fn find_all(&self) -> Result<Vec<Address>> {
        let records = self.records.read().await;
        let mut all: Vec<Address> = records.values().cloned().collect();
        all.sort_by_key(|a| a.id);
        Ok(all)
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Address>> {
        let records = self.records.read().await;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    async fn count(&self) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(&id);
        Ok(())
    }

    async fn delete(&self, address: &Address) -> Result<()> {
        if let Some(id) = address.id {
            let mut records = self.records.write().await;
            records.remove(&id);
        }
        Ok(())
    }

    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<()> {
        let mut records = self.records.write().await;
        for id in ids {
            records.remove(id);
        }
        Ok(())
    }

    async fn delete_entities(&self, addresses: &[Address]) -> Result<()> {
        let mut records = self.records.write().await;
        for address in addresses {
            if let Some(id) = address.id {
                records.remove(&id);
            }
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }
}
