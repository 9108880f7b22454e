pub mod json_table;
pub use json_table::*;

pub mod json_collection;
pub use json_collection::*;

pub mod json_source;
pub use json_source::*;

pub mod json_backend;
pub use json_backend::*;
