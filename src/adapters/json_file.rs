use crate::domain::model::Address;
use crate::domain::ports::AddressRepository;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const STORE_FILE: &str = "addresses.json";

/// On-disk document format. The id sequence travels with the data so keys
/// survive restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    next_id: i64,
    records: BTreeMap<i64, Address>,
}

/// Durable backend persisting the whole record set as a single JSON document
/// under `base_path`. Every operation re-reads the document, so multiple
/// repository instances pointed at the same directory see each other's
/// writes; the mutex only serializes access within one instance.
#[derive(Debug)]
pub struct JsonFileRepository {
    base_path: String,
    lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(base_path: String) -> Self {
        Self {
            base_path,
            lock: Mutex::new(()),
        }
    }

    fn store_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STORE_FILE)
    }

    fn load(&self) -> Result<StoreDocument> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(StoreDocument::default());
        }
        let data = fs::read(path)?;
        let document = serde_json::from_slice(&data)?;
        Ok(document)
    }

    fn persist(&self, document: &StoreDocument) -> Result<()> {
        let path = self.store_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(document)?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AddressRepository for JsonFileRepository {
    async fn save(&self, mut address: Address) -> Result<Address> {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;

        let id = match address.id {
            Some(id) => {
                document.next_id = document.next_id.max(id);
                id
            }
            None => {
                document.next_id += 1;
                document.next_id
            }
        };
        address.id = Some(id);

        document.records.insert(id, address.clone());
        self.persist(&document)?;
        Ok(address)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>> {
        let _guard = self.lock.lock().await;
        let document = self.load()?;
        Ok(document.records.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let document = self.load()?;
        Ok(document.records.contains_key(&id))
    }

    async fn find_all(&self) -> Result<Vec<Address>> {
        let _guard = self.lock.lock().await;
        let document = self.load()?;
        Ok(document.records.into_values().collect())
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Address>> {
        let _guard = self.lock.lock().await;
        let document = self.load()?;
        Ok(ids
            .iter()
            .filter_map(|id| document.records.get(id).cloned())
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        let _guard = self.lock.lock().await;
        let document = self.load()?;
        Ok(document.records.len() as u64)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;
        if document.records.remove(&id).is_some() {
            self.persist(&document)?;
        }
        Ok(())
    }

    async fn delete(&self, address: &Address) -> Result<()> {
        if let Some(id) = address.id {
            self.delete_by_id(id).await?;
        }
        Ok(())
    }

    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;
        let mut changed = false;
        for id in ids {
            changed |= document.records.remove(id).is_some();
        }
        if changed {
            self.persist(&document)?;
        }
        Ok(())
    }

    async fn delete_entities(&self, addresses: &[Address]) -> Result<()> {
        let ids: Vec<i64> = addresses.iter().filter_map(|a| a.id).collect();
        self.delete_all_by_id(&ids).await
    }

    async fn delete_all(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;
        document.records.clear();
        self.persist(&document)?;
        Ok(())
    }
}
