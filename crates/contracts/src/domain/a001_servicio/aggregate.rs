use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Hospital service (ward) identifier
    ServicioId
);

/// Hospital service, the top of the service → room → bed hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    pub id: ServicioId,
    pub nombre: String,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

/// Create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServicioId>,
    pub nombre: String,
    pub activo: bool,
}

impl ServicioDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre del servicio es obligatorio".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Servicio {
    type Id = ServicioId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "servicios"
    }

    fn element_name() -> &'static str {
        "Servicio"
    }

    fn list_name() -> &'static str {
        "Servicios"
    }
}
