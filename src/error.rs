//! Error types shared by the facade and its collaborators.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeocodeError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Machine-readable classification of a geocoding failure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The geocoding capability is not available on this device
    NotAvailable,
    /// The request was rejected before reaching a geocoder
    InvalidInput,
    /// The geocoder could not reach its backend
    Network,
    /// Any other classification code reported by a collaborator
    Other(String),
}

impl ErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "NOT_AVAILABLE" => ErrorKind::NotAvailable,
            "INVALID_INPUT" => ErrorKind::InvalidInput,
            "NETWORK_ERROR" => ErrorKind::Network,
            other => ErrorKind::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            ErrorKind::NotAvailable => "NOT_AVAILABLE",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::Network => "NETWORK_ERROR",
            ErrorKind::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("invalid position: {{lat, lng}} required")]
    InvalidPosition,

    #[error("address is empty")]
    MissingAddress,

    /// Failure reported by a local or remote geocoder
    #[error("{kind}: {message}")]
    Backend {
        kind: ErrorKind,
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl GeocodeError {
    /// Create a collaborator failure with the given classification
    pub fn backend(kind: ErrorKind, message: impl Into<String>) -> Self {
        GeocodeError::Backend {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a collaborator failure wrapping an underlying error
    pub fn with_source<E>(kind: ErrorKind, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GeocodeError::Backend {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_available(message: impl Into<String>) -> Self {
        Self::backend(ErrorKind::NotAvailable, message)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GeocodeError::InvalidPosition | GeocodeError::MissingAddress => ErrorKind::InvalidInput,
            GeocodeError::Backend { kind, .. } => kind.clone(),
        }
    }

    /// Whether this failure means the on-device capability is missing
    pub fn is_not_available(&self) -> bool {
        matches!(
            self,
            GeocodeError::Backend {
                kind: ErrorKind::NotAvailable,
                ..
            }
        )
    }
}
