pub mod module;
pub mod namespace;
pub mod set;
pub mod table;

pub use module::{ModuleDef, OpenReport};
pub use namespace::Namespace;
pub use set::{ModuleSet, ModuleStatus};
pub use table::{FunctionEntry, FunctionTable};
