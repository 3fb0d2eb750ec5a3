//! Namespace-scoped extension-module registry for embeddable interpreters.
//!
//! A module is a [`Namespace`] plus a [`FunctionTable`] of native entry
//! points. Opening a [`ModuleDef`] emits its one-line load diagnostic and
//! installs the table through the host's [`HostState`] seam; the host keeps
//! ownership of its namespace table throughout. [`ModuleSet`] opens many
//! modules against one host and tracks per-module status.

#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod host;
pub mod modules;
pub mod registry;

#[cfg(feature = "config")]
pub use config::{ModuleConfig, RegistryConfig};
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use error::RegistrationError;
pub use host::{HostState, InMemoryHost};
pub use modules::{CORE_NAMESPACE, core_module};
pub use registry::{
    FunctionEntry, FunctionTable, ModuleDef, ModuleSet, ModuleStatus, Namespace, OpenReport,
};
