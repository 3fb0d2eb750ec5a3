use std::collections::HashMap;
use std::io::Write;

#[cfg(feature = "config")]
use crate::config::RegistryConfig;
use crate::host::HostState;
use crate::registry::module::ModuleDef;

/// Load state of one module within a set. There is no transition back to
/// `Unloaded`; unloading, if it exists at all, is host business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    Unloaded,
    Loaded,
    Error(String),
}

#[derive(Debug)]
struct ModuleSlot<E> {
    def: ModuleDef<E>,
    status: ModuleStatus,
    enabled: bool,
}

/// A collection of modules opened against one host, with per-module status
/// tracking and embedder-facing load reports.
#[derive(Debug)]
pub struct ModuleSet<E> {
    slots: HashMap<String, ModuleSlot<E>>,
}

impl<E> Default for ModuleSet<E> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<E> ModuleSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module. The first definition of a namespace wins; a second
    /// insert under the same namespace is dropped and reported back.
    pub fn insert(&mut self, def: ModuleDef<E>) -> bool {
        let key = def.namespace().as_str().to_string();

        if self.slots.contains_key(&key) {
            tracing::warn!("ignoring duplicate module definition for {key}");
            return false;
        }

        self.slots.insert(
            key,
            ModuleSlot {
                def,
                status: ModuleStatus::Unloaded,
                enabled: true,
            },
        );
        true
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn status(&self, namespace: &str) -> Option<&ModuleStatus> {
        self.slots.get(namespace).map(|slot| &slot.status)
    }

    /// Disabled modules stay `Unloaded` when the set is opened.
    pub fn set_enabled(&mut self, namespace: &str, enabled: bool) {
        if let Some(slot) = self.slots.get_mut(namespace) {
            slot.enabled = enabled;
        }
    }

    /// Apply an embedder config: namespaces it disables are skipped by
    /// `open_all`; namespaces it does not mention stay enabled.
    #[cfg(feature = "config")]
    pub fn apply_config(&mut self, config: &RegistryConfig) {
        for (namespace, slot) in &mut self.slots {
            slot.enabled = config.is_enabled(namespace);
        }
    }

    /// Open every enabled, not-yet-loaded module against `host`, recording
    /// per-module outcomes. Failures do not stop the pass; they land in the
    /// module's status and in `error_reports`.
    pub fn open_all<H, W>(&mut self, host: &mut H, diagnostics: &mut W)
    where
        H: HostState<EntryPoint = E>,
        W: Write,
    {
        for slot in self.slots.values_mut() {
            if !slot.enabled || slot.status == ModuleStatus::Loaded {
                continue;
            }

            slot.status = match slot.def.open(host, diagnostics) {
                Ok(_) => ModuleStatus::Loaded,
                Err(err) => ModuleStatus::Error(err.to_string()),
            };
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.status == ModuleStatus::Loaded)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot.status, ModuleStatus::Error(_)))
            .count()
    }

    pub fn summary(&self) -> String {
        format!(
            "modules: {} loaded, {} errors",
            self.loaded_count(),
            self.error_count()
        )
    }

    pub fn error_reports(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .slots
            .values()
            .filter_map(|slot| {
                if let ModuleStatus::Error(err) = &slot.status {
                    Some(format!("module {}: {err}", slot.def.namespace()))
                } else {
                    None
                }
            })
            .collect();

        rows.sort();
        rows
    }

    pub fn status_reports(&self) -> Vec<String> {
        if self.slots.is_empty() {
            return vec!["modules: none registered".to_string()];
        }

        let mut rows: Vec<String> = self
            .slots
            .values()
            .map(|slot| {
                let status = match &slot.status {
                    _ if !slot.enabled => "disabled".to_string(),
                    ModuleStatus::Unloaded => "unloaded".to_string(),
                    ModuleStatus::Loaded => "loaded".to_string(),
                    ModuleStatus::Error(err) => format!("error: {err}"),
                };

                format!("module {} [{status}]", slot.def.namespace())
            })
            .collect();

        rows.sort();
        rows
    }
}
