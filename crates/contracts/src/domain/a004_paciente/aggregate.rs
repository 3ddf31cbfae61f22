use crate::domain::a001_servicio::aggregate::ServicioId;
use crate::domain::a002_habitacion::aggregate::HabitacionId;
use crate::domain::a003_cama::aggregate::CamaId;
use crate::domain::a005_dieta::aggregate::DietaId;
use crate::domain::a006_alergia::aggregate::AlergiaId;
use crate::domain::common::{normalize_text, AggregateRoot};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Patient identifier
    PacienteId
);

// ============================================================================
// Nested read-only references (as embedded by the pacientes endpoint)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicioRef {
    pub id: ServicioId,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitacionRef {
    pub id: HabitacionId,
    pub nombre: String,
    #[serde(default)]
    pub servicio: Option<ServicioRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamaRef {
    pub id: CamaId,
    pub nombre: String,
    #[serde(default)]
    pub habitacion: Option<HabitacionRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaRef {
    pub id: DietaId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlergiaRef {
    pub id: AlergiaId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Hospitalized patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paciente {
    pub id: PacienteId,
    pub cedula: String,
    pub name: String,
    #[serde(default)]
    pub cama: Option<CamaRef>,
    #[serde(default)]
    pub dietas: Vec<DietaRef>,
    #[serde(default)]
    pub alergias: Vec<AlergiaRef>,
    #[serde(default = "default_activo")]
    pub activo: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_activo() -> bool {
    true
}

impl Paciente {
    /// Label used in patient pickers: "Nombre - Cédula"
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.cedula)
    }

    /// Case-insensitive match on name or cedula
    pub fn matches(&self, term: &str) -> bool {
        let term = normalize_text(term);
        if term.is_empty() {
            return true;
        }
        normalize_text(&self.name).contains(&term) || normalize_text(&self.cedula).contains(&term)
    }

    pub fn servicio(&self) -> Option<&ServicioRef> {
        self.cama
            .as_ref()
            .and_then(|c| c.habitacion.as_ref())
            .and_then(|h| h.servicio.as_ref())
    }

    /// "Servicio / Habitación / Cama" location, empty parts skipped
    pub fn ubicacion(&self) -> String {
        let mut parts = Vec::new();
        if let Some(servicio) = self.servicio() {
            parts.push(servicio.nombre.clone());
        }
        if let Some(cama) = &self.cama {
            if let Some(habitacion) = &cama.habitacion {
                parts.push(habitacion.nombre.clone());
            }
            parts.push(cama.nombre.clone());
        }
        parts.join(" / ")
    }

    /// Diet recommended by the treating physician
    pub fn dieta_recomendada(&self) -> String {
        if self.dietas.is_empty() {
            return "No especificada".to_string();
        }
        self.dietas
            .iter()
            .map(|d| d.nombre.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn alergias_label(&self) -> String {
        if self.alergias.is_empty() {
            return "Sin alergias registradas".to_string();
        }
        self.alergias
            .iter()
            .map(|a| a.nombre.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacienteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PacienteId>,
    pub cedula: String,
    pub name: String,
    pub cama_id: Option<CamaId>,
    #[serde(default)]
    pub dietas_ids: Vec<DietaId>,
    #[serde(default)]
    pub alergias_ids: Vec<AlergiaId>,
    pub activo: bool,
}

impl PacienteDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del paciente es obligatorio".into());
        }
        if self.cedula.trim().is_empty() {
            return Err("La cédula es obligatoria".into());
        }
        if !self.cedula.trim().chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("La cédula solo puede contener letras y números".into());
        }
        if self.cama_id.is_none() {
            return Err("Debe asignar una cama".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Paciente {
    type Id = PacienteId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "pacientes"
    }

    fn element_name() -> &'static str {
        "Paciente"
    }

    fn list_name() -> &'static str {
        "Pacientes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paciente {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "cedula": "1020304050",
            "name": "Ana Gómez",
            "cama": {
                "id": 9,
                "nombre": "Cama 2",
                "habitacion": {
                    "id": 4,
                    "nombre": "Hab 201",
                    "servicio": { "id": 1, "nombre": "Pediatría" }
                }
            },
            "dietas": [{ "id": 1, "nombre": "Hiposódica" }],
            "alergias": [],
            "activo": true,
            "created_at": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_nested_location() {
        let p = sample();
        assert_eq!(p.servicio().map(|s| s.id), Some(ServicioId(1)));
        assert_eq!(p.ubicacion(), "Pediatría / Hab 201 / Cama 2");
        assert_eq!(p.label(), "Ana Gómez - 1020304050");
    }

    #[test]
    fn test_clinical_labels() {
        let mut p = sample();
        assert_eq!(p.dieta_recomendada(), "Hiposódica");
        assert_eq!(p.alergias_label(), "Sin alergias registradas");
        p.dietas.clear();
        assert_eq!(p.dieta_recomendada(), "No especificada");
    }

    #[test]
    fn test_matches_name_or_cedula() {
        let p = sample();
        assert!(p.matches("ana"));
        assert!(p.matches("10203"));
        assert!(p.matches("  "));
        assert!(!p.matches("pedro"));
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = PacienteDto {
            cedula: "123".into(),
            name: "Luis".into(),
            cama_id: Some(CamaId(1)),
            activo: true,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.cedula = "12-3".into();
        assert!(dto.validate().is_err());
        dto.cedula = "123".into();
        dto.cama_id = None;
        assert_eq!(dto.validate().unwrap_err(), "Debe asignar una cama");
    }
}
