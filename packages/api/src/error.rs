use serde::Deserialize;

/// Error taxonomy for API calls.
///
/// Every failure is terminal for the operation that produced it: there are
/// no retries and no transient/permanent distinction. Pages surface the
/// message of whichever variant they receive through the shared feedback
/// dialog.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, CORS...).
    #[error("falha de ligação ao servidor: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` carries the
    /// server's own text, shown to the user verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected envelope.
    #[error("resposta inesperada do servidor")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// True when the server said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Error body shape used by the backend: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_server_message() {
        let err = ApiError::Status {
            status: 422,
            message: "nome é obrigatório".to_string(),
        };
        assert_eq!(err.to_string(), "nome é obrigatório");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Status {
            status: 404,
            message: "cliente não encontrado".to_string(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_body_decodes() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"token inválido"}"#).unwrap();
        assert_eq!(body.message, "token inválido");
    }
}
