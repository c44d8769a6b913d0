pub mod store;

pub use crate::domain::model::Address;
pub use crate::domain::ports::AddressRepository;
pub use crate::utils::error::Result;
