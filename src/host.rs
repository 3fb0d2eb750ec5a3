use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::RegistrationError;
use crate::registry::namespace::Namespace;
use crate::registry::table::FunctionEntry;

/// The host interpreter boundary: one primitive that installs a named table
/// of entry points into host-owned state.
///
/// The registry never owns the host's namespace table — it only calls this
/// seam. Value representation, calling convention, and memory/GC rules all
/// stay on the host's side of it, including any collision policy for names
/// the host refuses to override.
pub trait HostState {
    /// The host's native callable type. Opaque to this crate.
    type EntryPoint;

    fn install_namespace(
        &mut self,
        namespace: &Namespace,
        entries: &[FunctionEntry<Self::EntryPoint>],
    ) -> Result<(), RegistrationError>;
}

/// Reference host keeping namespaces in plain maps.
///
/// Used by the test suite and by embedders that want registry behavior
/// without a real interpreter. Namespaces are keyed by their full dotted
/// path; installing over an existing (unsealed) namespace replaces its
/// table. Sealed names model a host refusing a collision.
#[derive(Debug, Default)]
pub struct InMemoryHost<E> {
    namespaces: HashMap<String, Vec<(String, E)>>,
    sealed: HashSet<String>,
}

impl<E: Clone> InMemoryHost<E> {
    pub fn new() -> Self {
        Self {
            namespaces: HashMap::new(),
            sealed: HashSet::new(),
        }
    }

    /// Mark a namespace as one this host refuses to (re)install.
    pub fn seal(&mut self, namespace: impl Into<String>) {
        self.sealed.insert(namespace.into());
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Exported member names of an installed namespace, in table order.
    pub fn member_names(&self, namespace: &str) -> Option<Vec<&str>> {
        self.namespaces
            .get(namespace)
            .map(|members| members.iter().map(|(name, _)| name.as_str()).collect())
    }

    pub fn entry_point(&self, namespace: &str, name: &str) -> Option<&E> {
        self.namespaces.get(namespace).and_then(|members| {
            members
                .iter()
                .find(|(member, _)| member == name)
                .map(|(_, entry_point)| entry_point)
        })
    }
}

impl<E: Clone> HostState for InMemoryHost<E> {
    type EntryPoint = E;

    fn install_namespace(
        &mut self,
        namespace: &Namespace,
        entries: &[FunctionEntry<E>],
    ) -> Result<(), RegistrationError> {
        if self.sealed.contains(namespace.as_str()) {
            tracing::warn!("refusing sealed namespace {namespace}");
            return Err(RegistrationError::Refused {
                namespace: namespace.as_str().to_string(),
                reason: "namespace is sealed".to_string(),
            });
        }

        let members = entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.entry_point.clone()))
            .collect();
        self.namespaces
            .insert(namespace.as_str().to_string(), members);

        Ok(())
    }
}
