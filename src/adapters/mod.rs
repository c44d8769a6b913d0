// Adapters layer: concrete repository backends behind the domain port.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
