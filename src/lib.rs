pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{InMemoryRepository, JsonFileRepository};
pub use crate::core::store::AddressStore;
pub use domain::model::Address;
pub use domain::ports::AddressRepository;
pub use utils::error::{Result, StoreError};
