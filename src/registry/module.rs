use std::io::{self, Write};

use crate::error::RegistrationError;
use crate::host::HostState;
use crate::registry::namespace::Namespace;
use crate::registry::table::FunctionTable;

/// What a successful open hands back to the host's calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenReport {
    /// Number of values left for the host to consume. Always 1 — the
    /// namespace table itself — independent of the table's size.
    pub values_returned: usize,
}

/// An extension module: a namespace plus the function table exported under
/// it. Built once at load time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ModuleDef<E> {
    namespace: Namespace,
    table: FunctionTable<E>,
}

impl<E> ModuleDef<E> {
    pub fn new(namespace: Namespace, table: FunctionTable<E>) -> Self {
        Self { namespace, table }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn table(&self) -> &FunctionTable<E> {
        &self.table
    }

    /// Load entry point. Writes the one-line load diagnostic to
    /// `diagnostics`, then asks the host to install the namespace.
    ///
    /// The diagnostic is emitted before registration is attempted and
    /// unconditionally, so its presence in a log is not evidence of
    /// success. Host failures propagate unchanged; nothing is retried.
    pub fn open<H, W>(&self, host: &mut H, diagnostics: &mut W) -> Result<OpenReport, RegistrationError>
    where
        H: HostState<EntryPoint = E>,
        W: Write,
    {
        self.announce(diagnostics);

        tracing::debug!("registering namespace {}", self.namespace);
        host.install_namespace(&self.namespace, self.table.entries())?;
        tracing::debug!(
            "namespace {} loaded ({} entries)",
            self.namespace,
            self.table.len()
        );

        Ok(OpenReport { values_returned: 1 })
    }

    /// Load entry point targeting the process stderr stream, matching the
    /// original module's `fputs(..., stderr)`.
    pub fn open_to_stderr<H>(&self, host: &mut H) -> Result<OpenReport, RegistrationError>
    where
        H: HostState<EntryPoint = E>,
    {
        self.open(host, &mut io::stderr().lock())
    }

    // Diagnostic write failures are swallowed, as the original's fputs
    // result was.
    fn announce<W: Write>(&self, diagnostics: &mut W) {
        let _ = writeln!(diagnostics, "{}", self.namespace.load_symbol());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InMemoryHost;

    fn empty_module(path: &str) -> ModuleDef<u8> {
        ModuleDef::new(Namespace::new(path).unwrap(), FunctionTable::new())
    }

    #[test]
    fn open_installs_and_returns_one_value() {
        let module = empty_module("sancus.core");
        let mut host = InMemoryHost::new();
        let mut diag = Vec::new();

        let report = module.open(&mut host, &mut diag).unwrap();

        assert_eq!(report.values_returned, 1);
        assert!(host.contains("sancus.core"));
        assert_eq!(host.member_names("sancus.core"), Some(Vec::new()));
    }

    #[test]
    fn diagnostic_line_is_byte_exact() {
        let module = empty_module("sancus.core");
        let mut host = InMemoryHost::new();
        let mut diag = Vec::new();

        module.open(&mut host, &mut diag).unwrap();

        assert_eq!(diag, b"luaopen_sancus_core\n");
    }

    #[test]
    fn repeated_opens_emit_one_line_each() {
        let module = empty_module("sancus.core");
        let mut host = InMemoryHost::new();
        let mut diag = Vec::new();

        for _ in 0..3 {
            module.open(&mut host, &mut diag).unwrap();
        }

        let text = String::from_utf8(diag).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec!["luaopen_sancus_core"; 3]);
    }

    #[test]
    fn diagnostic_is_emitted_even_when_host_refuses() {
        let module = empty_module("sancus.core");
        let mut host = InMemoryHost::new();
        host.seal("sancus.core");
        let mut diag = Vec::new();

        let err = module.open(&mut host, &mut diag).unwrap_err();

        assert!(matches!(err, RegistrationError::Refused { .. }));
        assert_eq!(diag, b"luaopen_sancus_core\n");
    }

    #[test]
    fn report_is_independent_of_table_size() {
        let mut table = FunctionTable::new();
        table.insert("hash", 7u8);
        table.insert("verify", 8u8);
        let module = ModuleDef::new(Namespace::new("sancus.crypto").unwrap(), table);

        let mut host = InMemoryHost::new();
        let report = module.open(&mut host, &mut Vec::new()).unwrap();

        assert_eq!(report.values_returned, 1);
        assert_eq!(
            host.member_names("sancus.crypto"),
            Some(vec!["hash", "verify"])
        );
    }
}
