use thiserror::Error;

/// Failure to install a namespace into the host interpreter.
///
/// Nothing in this crate retries: every error propagates unchanged to the
/// caller (typically the host's module loader), which decides whether a
/// failed load is fatal.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("namespace must not be empty")]
    EmptyNamespace,

    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    /// The host refused to install the namespace (e.g. it collides with an
    /// existing entry the host will not override). Collision policy belongs
    /// to the host, not to this crate.
    #[error("host refused namespace {namespace:?}: {reason}")]
    Refused { namespace: String, reason: String },

    #[error("host unavailable: {0}")]
    HostUnavailable(String),
}

/// Failure to read or parse a registry config document.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: toml::de::Error,
    },
}
