use std::time::Duration;

/// Failure payload produced by a [`ModuleLoader`](crate::ModuleLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    NotFound(String),
    Parse { specifier: String, message: String },
    Init { specifier: String, message: String },
    Other(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(specifier) => write!(f, "module not found: {}", specifier),
            LoadError::Parse { specifier, message } => {
                write!(f, "failed to parse {}: {}", specifier, message)
            }
            LoadError::Init { specifier, message } => {
                write!(f, "{} threw during initialization: {}", specifier, message)
            }
            LoadError::Other(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for LoadError {}

/// What the bridge raises when a synchronous import cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncLoadError {
    /// The asynchronous load rejected. Carries the original failure.
    Load { specifier: String, source: LoadError },
    /// The configured deadline elapsed before the load settled.
    Timeout { specifier: String, waited: Duration },
}

impl AsyncLoadError {
    pub fn specifier(&self) -> &str {
        match self {
            AsyncLoadError::Load { specifier, .. } => specifier,
            AsyncLoadError::Timeout { specifier, .. } => specifier,
        }
    }
}

impl std::fmt::Display for AsyncLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsyncLoadError::Load { specifier, source } => {
                write!(f, "async load of {} failed: {}", specifier, source)
            }
            AsyncLoadError::Timeout { specifier, waited } => {
                write!(f, "{} did not settle within {:?}", specifier, waited)
            }
        }
    }
}

impl std::error::Error for AsyncLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AsyncLoadError::Load { source, .. } => Some(source),
            AsyncLoadError::Timeout { .. } => None,
        }
    }
}
