/// One exported function: a name and the native entry point the host will
/// invoke with its own calling convention. The entry-point type `E` belongs
/// to the host, not to this crate.
#[derive(Debug, Clone)]
pub struct FunctionEntry<E> {
    pub name: String,
    pub entry_point: E,
}

/// Ordered sequence of exported functions with explicit length.
///
/// The C original ends its table with a `{NULL, NULL}` sentinel pair; here
/// the length is carried by the sequence itself and no terminator exists.
/// An empty table is valid — it installs a namespace with zero members.
#[derive(Debug, Clone)]
pub struct FunctionTable<E> {
    entries: Vec<FunctionEntry<E>>,
}

impl<E> Default for FunctionTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FunctionTable<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an exported function. Duplicate names are last-write-wins: the
    /// stored entry point is replaced in place, keeping the position of the
    /// first insertion, so enumeration order is stable across re-inserts.
    pub fn insert(&mut self, name: impl Into<String>, entry_point: E) -> &mut Self {
        let name = name.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.entry_point = entry_point,
            None => self.entries.push(FunctionEntry { name, entry_point }),
        }

        self
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.entry_point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry<E>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[FunctionEntry<E>] {
        &self.entries
    }
}

impl<E> FromIterator<(String, E)> for FunctionTable<E> {
    fn from_iter<T: IntoIterator<Item = (String, E)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, entry_point) in iter {
            table.insert(name, entry_point);
        }
        table
    }
}
