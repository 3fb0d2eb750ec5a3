use crate::registry::module::ModuleDef;
use crate::registry::namespace::Namespace;
use crate::registry::table::FunctionTable;

/// Namespace of the core module.
pub const CORE_NAMESPACE: &str = "sancus.core";

/// The `sancus.core` module: a well-formed namespace exporting zero
/// functions. Opening it installs the empty namespace and emits the
/// `luaopen_sancus_core` load diagnostic.
pub fn core_module<E>() -> ModuleDef<E> {
    let namespace = Namespace::new(CORE_NAMESPACE).expect("core namespace is well-formed");
    ModuleDef::new(namespace, FunctionTable::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InMemoryHost;

    #[test]
    fn core_module_loads_empty_namespace() {
        let module: ModuleDef<u8> = core_module();
        let mut host = InMemoryHost::new();
        let mut diag = Vec::new();

        let report = module.open(&mut host, &mut diag).unwrap();

        assert_eq!(report.values_returned, 1);
        assert_eq!(diag, b"luaopen_sancus_core\n");
        assert_eq!(host.member_names(CORE_NAMESPACE), Some(Vec::new()));
    }
}
