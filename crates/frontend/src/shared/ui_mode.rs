/// Which panel of a CRUD screen is open
///
/// One value per screen instead of a boolean per modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Closed,
    Creating,
    Editing(i64),
}

impl UiMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, UiMode::Closed)
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            UiMode::Editing(id) => Some(*id),
            _ => None,
        }
    }

    /// Title of the open panel, e.g. "Nueva Cama" / "Editar Cama"
    pub fn title(&self, element_name: &str) -> String {
        match self {
            UiMode::Closed => String::new(),
            UiMode::Creating => format!("Nuevo registro: {}", element_name),
            UiMode::Editing(_) => format!("Editar {}", element_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert!(!UiMode::Closed.is_open());
        assert!(UiMode::Creating.is_open());
        assert_eq!(UiMode::Editing(4).editing_id(), Some(4));
        assert_eq!(UiMode::Creating.editing_id(), None);
        assert_eq!(UiMode::Editing(4).title("Cama"), "Editar Cama");
        assert_eq!(UiMode::default(), UiMode::Closed);
    }
}
