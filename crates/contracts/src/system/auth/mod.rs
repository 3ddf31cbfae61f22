use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// The refresh token is only returned when the backend rotates it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub name: String,
}

/// Staff role; anything the client does not know maps to `Unassigned`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Coordinador,
    Auxiliar,
    JefeEnfermeria,
    #[default]
    #[serde(other)]
    Unassigned,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Coordinador => "coordinador",
            UserRole::Auxiliar => "auxiliar",
            UserRole::JefeEnfermeria => "jefe_enfermeria",
            UserRole::Unassigned => "",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "admin" => UserRole::Admin,
            "coordinador" => UserRole::Coordinador,
            "auxiliar" => UserRole::Auxiliar,
            "jefe_enfermeria" => UserRole::JefeEnfermeria,
            _ => UserRole::Unassigned,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Coordinador => "Coordinador",
            UserRole::Auxiliar => "Auxiliar",
            UserRole::JefeEnfermeria => "Jefe de Enfermería",
            UserRole::Unassigned => "Sin rol",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
