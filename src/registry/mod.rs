pub mod opener;
pub use opener::*;

#[allow(clippy::module_inception)]
pub mod registry;
pub use registry::*;

pub mod default_registry;
pub use default_registry::*;

#[cfg(test)]
pub(crate) use _tests::fixtures;
