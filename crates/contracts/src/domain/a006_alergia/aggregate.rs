use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(AlergiaId);

/// Allergy or food intolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alergia {
    pub id: AlergiaId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlergiaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AlergiaId>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl AlergiaDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("Por favor, introduce el nombre de la alergia".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Alergia {
    type Id = AlergiaId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        // dietas and alergias share one backend app
        "dietas/alergias"
    }

    fn element_name() -> &'static str {
        "Alergia"
    }

    fn list_name() -> &'static str {
        "Alergias"
    }
}
