pub mod memory_collection;
pub use memory_collection::*;

pub mod memory_source;
pub use memory_source::*;
