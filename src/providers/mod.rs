//! Electricity provider (DISCOM) catalog
//!
//! The step 1 provider field offers names from an ordered catalog. The
//! catalog is either the built-in list or a JSON file named in settings.

pub mod autocomplete;
pub mod catalog;

pub use autocomplete::suggest;
pub use catalog::{BuiltinProviders, ProviderCatalog, ProviderFile, ProviderSource};
