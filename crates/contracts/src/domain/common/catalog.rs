//! Catalog resources managed from the data-management screen
//!
//! Services, rooms, beds, patients, diets and allergies share one list/form
//! screen. `CatalogKind` maps each of them onto its typed aggregate and DTO,
//! `CatalogRow` is the flattened table row and `CatalogForm` the edit form.

use super::{normalize_text, AggregateId, AggregateRoot};
use crate::domain::a001_servicio::aggregate::{Servicio, ServicioDto, ServicioId};
use crate::domain::a002_habitacion::aggregate::{Habitacion, HabitacionDto, HabitacionId};
use crate::domain::a003_cama::aggregate::{Cama, CamaDto, CamaId};
use crate::domain::a004_paciente::aggregate::{Paciente, PacienteDto, PacienteId};
use crate::domain::a005_dieta::aggregate::{Dieta, DietaDto, DietaId};
use crate::domain::a006_alergia::aggregate::{Alergia, AlergiaDto, AlergiaId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Servicios,
    Habitaciones,
    Camas,
    Pacientes,
    Dietas,
    Alergias,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Servicios,
        CatalogKind::Habitaciones,
        CatalogKind::Camas,
        CatalogKind::Pacientes,
        CatalogKind::Dietas,
        CatalogKind::Alergias,
    ];

    /// Stable key for selects and DOM ids
    pub fn key(&self) -> &'static str {
        match self {
            CatalogKind::Servicios => "servicios",
            CatalogKind::Habitaciones => "habitaciones",
            CatalogKind::Camas => "camas",
            CatalogKind::Pacientes => "pacientes",
            CatalogKind::Dietas => "dietas",
            CatalogKind::Alergias => "alergias",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }

    /// REST collection path below the api base
    pub fn collection_name(&self) -> &'static str {
        match self {
            CatalogKind::Servicios => Servicio::collection_name(),
            CatalogKind::Habitaciones => Habitacion::collection_name(),
            CatalogKind::Camas => Cama::collection_name(),
            CatalogKind::Pacientes => Paciente::collection_name(),
            CatalogKind::Dietas => Dieta::collection_name(),
            CatalogKind::Alergias => Alergia::collection_name(),
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            CatalogKind::Servicios => Servicio::list_name(),
            CatalogKind::Habitaciones => Habitacion::list_name(),
            CatalogKind::Camas => Cama::list_name(),
            CatalogKind::Pacientes => Paciente::list_name(),
            CatalogKind::Dietas => Dieta::list_name(),
            CatalogKind::Alergias => Alergia::list_name(),
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            CatalogKind::Servicios => Servicio::element_name(),
            CatalogKind::Habitaciones => Habitacion::element_name(),
            CatalogKind::Camas => Cama::element_name(),
            CatalogKind::Pacientes => Paciente::element_name(),
            CatalogKind::Dietas => Dieta::element_name(),
            CatalogKind::Alergias => Alergia::element_name(),
        }
    }

    /// Resource a record of this kind hangs from (room → service, ...)
    pub fn parent(&self) -> Option<CatalogKind> {
        match self {
            CatalogKind::Habitaciones => Some(CatalogKind::Servicios),
            CatalogKind::Camas => Some(CatalogKind::Habitaciones),
            CatalogKind::Pacientes => Some(CatalogKind::Camas),
            _ => None,
        }
    }

    pub fn has_descripcion(&self) -> bool {
        matches!(self, CatalogKind::Dietas | CatalogKind::Alergias)
    }

    pub fn has_cedula(&self) -> bool {
        matches!(self, CatalogKind::Pacientes)
    }

    /// Decode a list response into table rows
    pub fn rows_from_json(&self, value: serde_json::Value) -> Result<Vec<CatalogRow>, String> {
        match self {
            CatalogKind::Servicios => decode::<Servicio>(value),
            CatalogKind::Habitaciones => decode::<Habitacion>(value),
            CatalogKind::Camas => decode::<Cama>(value),
            CatalogKind::Pacientes => decode::<Paciente>(value),
            CatalogKind::Dietas => decode::<Dieta>(value),
            CatalogKind::Alergias => decode::<Alergia>(value),
        }
    }
}

fn decode<T>(value: serde_json::Value) -> Result<Vec<CatalogRow>, String>
where
    T: DeserializeOwned + Into<CatalogRow>,
{
    serde_json::from_value::<Vec<T>>(value)
        .map(|items| items.into_iter().map(Into::into).collect())
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

// ============================================================================
// Row
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: i64,
    pub nombre: String,
    /// Secondary column: service name, location or description
    pub detalle: String,
    pub activo: bool,
    pub parent_id: Option<i64>,
    pub descripcion: Option<String>,
    pub cedula: Option<String>,
    pub dietas_ids: Vec<i64>,
    pub alergias_ids: Vec<i64>,
}

impl CatalogRow {
    fn base(id: i64, nombre: String, activo: bool) -> Self {
        Self {
            id,
            nombre,
            detalle: String::new(),
            activo,
            parent_id: None,
            descripcion: None,
            cedula: None,
            dietas_ids: Vec::new(),
            alergias_ids: Vec::new(),
        }
    }

    pub fn to_form(&self) -> CatalogForm {
        CatalogForm {
            id: Some(self.id),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone().unwrap_or_default(),
            cedula: self.cedula.clone().unwrap_or_default(),
            parent_id: self.parent_id,
            activo: self.activo,
            dietas_ids: self.dietas_ids.clone(),
            alergias_ids: self.alergias_ids.clone(),
        }
    }

    /// Accent-insensitive search over name, detail and cedula (min 3 chars)
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = normalize_text(filter);
        if filter.chars().count() < 3 {
            return true;
        }
        normalize_text(&self.nombre).contains(&filter)
            || normalize_text(&self.detalle).contains(&filter)
            || self
                .cedula
                .as_deref()
                .map(|c| normalize_text(c).contains(&filter))
                .unwrap_or(false)
    }
}

impl From<Servicio> for CatalogRow {
    fn from(s: Servicio) -> Self {
        Self::base(s.id.value(), s.nombre, s.activo)
    }
}

impl From<Habitacion> for CatalogRow {
    fn from(h: Habitacion) -> Self {
        let mut row = Self::base(h.id.value(), h.nombre, h.activo);
        row.detalle = h.servicio.unwrap_or_default();
        row.parent_id = h.servicio_id.map(|id| id.value());
        row
    }
}

impl From<Cama> for CatalogRow {
    fn from(c: Cama) -> Self {
        let mut row = Self::base(c.id.value(), c.nombre, c.activo);
        row.parent_id = c.habitacion.map(|id| id.value());
        row.detalle = c
            .habitacion
            .map(|id| format!("Habitación #{}", id))
            .unwrap_or_default();
        row
    }
}

impl From<Paciente> for CatalogRow {
    fn from(p: Paciente) -> Self {
        let detalle = p.ubicacion();
        let mut row = Self::base(p.id.value(), p.name, p.activo);
        row.detalle = detalle;
        row.parent_id = p.cama.as_ref().map(|c| c.id.value());
        row.cedula = Some(p.cedula);
        row.dietas_ids = p.dietas.iter().map(|d| d.id.value()).collect();
        row.alergias_ids = p.alergias.iter().map(|a| a.id.value()).collect();
        row
    }
}

impl From<Dieta> for CatalogRow {
    fn from(d: Dieta) -> Self {
        let mut row = Self::base(d.id.value(), d.nombre, d.activo);
        row.detalle = d.descripcion.clone().unwrap_or_default();
        row.descripcion = d.descripcion;
        row
    }
}

impl From<Alergia> for CatalogRow {
    fn from(a: Alergia) -> Self {
        let mut row = Self::base(a.id.value(), a.nombre, a.activo);
        row.detalle = a.descripcion.clone().unwrap_or_default();
        row.descripcion = a.descripcion;
        row
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub cedula: String,
    pub parent_id: Option<i64>,
    pub activo: bool,
    pub dietas_ids: Vec<i64>,
    pub alergias_ids: Vec<i64>,
}

impl Default for CatalogForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            descripcion: String::new(),
            cedula: String::new(),
            parent_id: None,
            activo: true,
            dietas_ids: Vec::new(),
            alergias_ids: Vec::new(),
        }
    }
}

impl CatalogForm {
    fn descripcion_opt(&self) -> Option<String> {
        let d = self.descripcion.trim();
        if d.is_empty() {
            None
        } else {
            Some(d.to_string())
        }
    }

    /// Validate the form through the typed DTO of `kind` and serialize it
    pub fn to_payload(&self, kind: CatalogKind) -> Result<serde_json::Value, String> {
        let nombre = self.nombre.trim().to_string();
        match kind {
            CatalogKind::Servicios => {
                let dto = ServicioDto {
                    id: self.id.map(ServicioId),
                    nombre,
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
            CatalogKind::Habitaciones => {
                let dto = HabitacionDto {
                    id: self.id.map(HabitacionId),
                    nombre,
                    servicio_id: self.parent_id.map(ServicioId),
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
            CatalogKind::Camas => {
                let dto = CamaDto {
                    id: self.id.map(CamaId),
                    nombre,
                    habitacion: self.parent_id.map(HabitacionId),
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
            CatalogKind::Pacientes => {
                let dto = PacienteDto {
                    id: self.id.map(PacienteId),
                    cedula: self.cedula.trim().to_string(),
                    name: nombre,
                    cama_id: self.parent_id.map(CamaId),
                    dietas_ids: self.dietas_ids.iter().copied().map(DietaId).collect(),
                    alergias_ids: self.alergias_ids.iter().copied().map(AlergiaId).collect(),
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
            CatalogKind::Dietas => {
                let dto = DietaDto {
                    id: self.id.map(DietaId),
                    nombre,
                    descripcion: self.descripcion_opt(),
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
            CatalogKind::Alergias => {
                let dto = AlergiaDto {
                    id: self.id.map(AlergiaId),
                    nombre,
                    descripcion: self.descripcion_opt(),
                    activo: self.activo,
                };
                dto.validate()?;
                to_json(&dto)
            }
        }
    }
}

fn to_json<T: Serialize>(dto: &T) -> Result<serde_json::Value, String> {
    serde_json::to_value(dto).map_err(|e| format!("No se pudo serializar: {}", e))
}

/// Parse an id typed into a select/input
pub fn parse_id(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
