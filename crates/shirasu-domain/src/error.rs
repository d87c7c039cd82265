//! Error handling types
//!
//! One error enum covers the whole runtime. The variants fall into the
//! categories the runtime treats differently:
//!
//! | Category | Variants | Raised |
//! |----------|----------|--------|
//! | Registration | `DuplicateDependencyProvider`, `DuplicateAddon`, `NoSuchAddon`, `LoadAddon` | at setup time |
//! | Resolution | `UnknownDependency`, `CircularDependency`, `DependencyType` | when a handler or rule is invoked |
//! | Remote call | `ActionFailed`, `Timeout` | inside `call_action` |
//! | Transport | `ConnectionClosed`, `ConnectionRefused` | by the connection core, retried |
//!
//! Everything else is unclassified and fatal to the reconnect loop.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shirasu
#[derive(Error, Debug)]
pub enum Error {
    /// One or more declared dependencies have no registered provider
    #[error("unknown dependencies: {}", deps.join(", "))]
    UnknownDependency {
        /// Every unresolved dependency name, in declaration order
        deps: Vec<String>,
    },

    /// A dependency is already being resolved further up the chain
    #[error("circular dependencies: {} (resolving {})", deps.join(", "), chain.join(" -> "))]
    CircularDependency {
        /// Declared names found in the resolution chain
        deps: Vec<String>,
        /// The resolution chain at the point of detection
        chain: Vec<String>,
    },

    /// A provider is already registered under this name
    #[error("duplicate dependency provider: {name}")]
    DuplicateDependencyProvider {
        /// The dependency name
        name: String,
    },

    /// A resolved dependency does not have the requested type
    #[error("dependency {name} is not of type {expected}")]
    DependencyType {
        /// The dependency name
        name: String,
        /// Type the caller asked for
        expected: &'static str,
    },

    /// An addon with the same name is already loaded
    #[error("duplicate addon: {name}")]
    DuplicateAddon {
        /// The addon name
        name: String,
    },

    /// An addon module could not be loaded
    #[error("failed to load addon module {module}: {message}")]
    LoadAddon {
        /// The module identifier
        module: String,
        /// Why loading failed
        message: String,
    },

    /// No addon with this name is loaded
    #[error("no such addon: {name}")]
    NoSuchAddon {
        /// The addon name
        name: String,
    },

    /// The remote end reported a failed action
    #[error("action {action} failed (retcode {retcode}): {msg} {wording}")]
    ActionFailed {
        /// Action that was called
        action: String,
        /// Remote return code
        retcode: i64,
        /// Remote error message
        msg: String,
        /// Human-readable wording of the failure
        wording: String,
    },

    /// An operation did not complete in time
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// What was being waited for
        operation: String,
        /// The deadline that elapsed
        after: Duration,
    },

    /// The connection was closed by the peer or dropped
    #[error("connection closed")]
    ConnectionClosed,

    /// The peer refused the connection
    #[error("connection refused")]
    ConnectionRefused,

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// UTF-8 decoding error
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network-related error that is not a recoverable disconnect
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Dependency and addon error creation methods
impl Error {
    /// Create an unknown dependency error
    pub fn unknown_dependencies<I, S>(deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownDependency {
            deps: deps.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a circular dependency error
    pub fn circular_dependencies(deps: Vec<String>, chain: Vec<String>) -> Self {
        Self::CircularDependency { deps, chain }
    }

    /// Create a duplicate provider error
    pub fn duplicate_provider<S: Into<String>>(name: S) -> Self {
        Self::DuplicateDependencyProvider { name: name.into() }
    }

    /// Create a duplicate addon error
    pub fn duplicate_addon<S: Into<String>>(name: S) -> Self {
        Self::DuplicateAddon { name: name.into() }
    }

    /// Create an addon module load error
    pub fn load_addon<M: Into<String>, S: Into<String>>(module: M, message: S) -> Self {
        Self::LoadAddon {
            module: module.into(),
            message: message.into(),
        }
    }

    /// Create a missing addon error
    pub fn no_such_addon<S: Into<String>>(name: S) -> Self {
        Self::NoSuchAddon { name: name.into() }
    }
}

// Remote call error creation methods
impl Error {
    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, after: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            after,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration, network and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Why the connection should be re-established, if this error allows it
    ///
    /// Only closed and refused connections are recoverable; every other
    /// error terminates the listen loop.
    pub fn reconnect_reason(&self) -> Option<&'static str> {
        match self {
            Self::ConnectionClosed => Some("Connection closed"),
            Self::ConnectionRefused => Some("Connection refused"),
            _ => None,
        }
    }

    /// Whether this error was raised while resolving dependencies
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDependency { .. }
                | Self::CircularDependency { .. }
                | Self::DependencyType { .. }
        )
    }
}
