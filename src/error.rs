//! Frontend Errors

/// Failures at the HTTP and page-config seams
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    #[error("Netzwerkfehler: {0}")]
    Network(String),

    #[error("Ungültige Antwort: {0}")]
    Decode(String),

    #[error("Konfiguration: {0}")]
    Config(String),
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => UiError::Decode(e.to_string()),
            other => UiError::Network(other.to_string()),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;
