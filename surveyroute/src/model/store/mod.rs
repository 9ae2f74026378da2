mod coordinate_store;
mod memory_store;
mod store_error;

pub use coordinate_store::{ArrangementUpdate, CoordinateStore};
pub use memory_store::MemoryStore;
pub use store_error::StoreError;
