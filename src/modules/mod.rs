pub mod core;

pub use self::core::{CORE_NAMESPACE, core_module};
