use crate::domain::a001_servicio::aggregate::ServicioId;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(HabitacionId);

/// Room inside a hospital service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habitacion {
    pub id: HabitacionId,
    pub nombre: String,
    pub servicio_id: Option<ServicioId>,
    /// Service name, read-only on the server side
    #[serde(default)]
    pub servicio: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitacionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<HabitacionId>,
    pub nombre: String,
    pub servicio_id: Option<ServicioId>,
    pub activo: bool,
}

impl HabitacionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre de la habitación es obligatorio".into());
        }
        if self.servicio_id.is_none() {
            return Err("Debe seleccionar un servicio".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Habitacion {
    type Id = HabitacionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "habitaciones"
    }

    fn element_name() -> &'static str {
        "Habitación"
    }

    fn list_name() -> &'static str {
        "Habitaciones"
    }
}
