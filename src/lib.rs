//! Open tabular data files through one interface, whatever their format.
//!
//! Format backends implement [`Opener`] and are registered by name in a
//! [`Registry`]. [`Registry::open`] asks each backend in registration order
//! and returns the first [`Source`] produced. A source lists and hands out
//! named [`Collection`]s, forward-only cursors over records.
//!
//! ```
//! use std::path::Path;
//! use tabsource::{Cell, Detected, MemorySource, Registry, SourceError};
//!
//! let mut registry = Registry::new();
//! registry.register("memory", |path: &Path| -> Result<Detected, SourceError> {
//!     if path.extension().is_some_and(|e| e == "mem") {
//!         let source = MemorySource::default()
//!             .with_collection("Sheet1", vec![vec![Cell::text("Ana"), Cell::Int(30)]]);
//!         Ok(Detected::opened(source))
//!     } else {
//!         Ok(Detected::NotInFormat)
//!     }
//! })?;
//!
//! let source = registry.open("people.mem")?;
//! let mut sheet = source.get("Sheet1")?;
//! while sheet.next_record() {
//!     let (mut name, mut age) = (String::new(), 0i64);
//!     sheet.scan(&mut [(&mut name).into(), (&mut age).into()])?;
//!     assert_eq!((name.as_str(), age), ("Ana", 30));
//! }
//! assert!(sheet.err().is_none());
//! # Ok::<(), SourceError>(())
//! ```

pub mod source;
pub use source::{Cell, Collection, FieldKind, ReaderConfig, ScanDest, Source, SourceError};

pub mod registry;
pub use registry::{open, register, registered_names, Detected, Opener, Registry};

pub mod memory;
pub use memory::{MemoryCollection, MemorySource};

pub mod json;
pub use json::{JsonBackend, JsonSource};
