use contracts::shared::api_error::server_message;
use thiserror::Error;

/// Failure of a call to the REST backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("No se pudo preparar la solicitud: {0}")]
    Serialize(String),
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("La sesión ha expirado. Inicie sesión nuevamente")]
    Unauthorized,
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the server's own message
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            if let Some(message) = server_message(body) {
                return ApiError::Status { status, message };
            }
            return ApiError::Unauthorized;
        }
        let message = server_message(body).unwrap_or_else(|| generic_message(status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

fn generic_message(status: u16) -> String {
    match status {
        400 => "Solicitud inválida".to_string(),
        403 => "No tiene permisos para realizar esta acción".to_string(),
        404 => "Recurso no encontrado".to_string(),
        500..=599 => "Error interno del servidor".to_string(),
        _ => format!("Error HTTP {}", status),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_status(400, r#"{"paciente": ["No se puede crear un pedido para un paciente inactivo"]}"#);
        assert_eq!(
            err.to_string(),
            "paciente: No se puede crear un pedido para un paciente inactivo"
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_generic_messages() {
        assert_eq!(ApiError::from_status(503, "").to_string(), "Error interno del servidor");
        assert_eq!(ApiError::from_status(418, "").to_string(), "Error HTTP 418");
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_login_failure_keeps_detail() {
        let err = ApiError::from_status(401, r#"{"detail": "Usuario o contraseña incorrectos"}"#);
        assert_eq!(err.to_string(), "Usuario o contraseña incorrectos");
    }
}
