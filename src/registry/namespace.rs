use std::fmt;

use crate::error::RegistrationError;

/// Dotted module path under which exported functions become reachable from
/// host-language code (e.g. `sancus.core`).
///
/// Validated once at construction and immutable afterwards: non-empty, and
/// every dot-separated segment is a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(RegistrationError::EmptyNamespace);
        }

        let bad_segment = value
            .split('.')
            .find_map(|segment| check_segment(segment).err());
        if let Some(reason) = bad_segment {
            return Err(RegistrationError::InvalidNamespace {
                namespace: value,
                reason,
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dot-separated path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The C-convention loader symbol for this namespace: `luaopen_` with
    /// dots replaced by underscores (`sancus.core` → `luaopen_sancus_core`).
    /// This is the exact text of the load-time diagnostic line.
    pub fn load_symbol(&self) -> String {
        format!("luaopen_{}", self.0.replace('.', "_"))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_segment(segment: &str) -> Result<(), String> {
    let mut chars = segment.chars();

    let Some(first) = chars.next() else {
        return Err("empty path segment".to_string());
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(format!("segment must start with a letter or '_': {segment:?}"));
    }

    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(format!("invalid character {bad:?} in segment {segment:?}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_paths() {
        let ns = Namespace::new("sancus.core").unwrap();
        assert_eq!(ns.as_str(), "sancus.core");
        assert_eq!(ns.segments().collect::<Vec<_>>(), vec!["sancus", "core"]);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Namespace::new(""),
            Err(RegistrationError::EmptyNamespace)
        ));
    }

    #[test]
    fn rejects_malformed_segments() {
        for bad in ["sancus.", ".core", "sancus..core", "sancus.1core", "san cus"] {
            assert!(
                matches!(
                    Namespace::new(bad),
                    Err(RegistrationError::InvalidNamespace { .. })
                ),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn load_symbol_flattens_dots() {
        let ns = Namespace::new("sancus.core").unwrap();
        assert_eq!(ns.load_symbol(), "luaopen_sancus_core");
    }
}
