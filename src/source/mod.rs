pub mod source_error;
pub use source_error::*;

pub mod field_kind;
pub use field_kind::*;

pub mod reader_config;
pub use reader_config::*;

pub mod cell;
pub use cell::*;

pub mod scan_dest;
pub use scan_dest::*;

pub mod record_cursor;
pub use record_cursor::*;

pub mod collection;
pub use collection::*;

#[allow(clippy::module_inception)]
pub mod source;
pub use source::*;
