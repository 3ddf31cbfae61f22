use super::{Menu, SectionTitle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option types offered for each section when composing a new menu
pub fn section_template(section: SectionTitle) -> &'static [&'static str] {
    match section {
        SectionTitle::Desayuno => &["entrada", "huevos", "acompanantes", "toppings", "bebidas"],
        SectionTitle::Algo => &[
            "media_manana_fit",
            "media_manana_tradicional",
            "bebidas_calientes",
            "bebidas_frias",
        ],
        SectionTitle::Almuerzo => &[
            "sopa_del_dia",
            "plato_principal",
            "vegetariano",
            "acompanantes",
            "vegetales",
            "toppings",
            "bebidas",
            "postre",
            "adicionales",
        ],
        SectionTitle::Onces => &[
            "refrigerio_fit",
            "refrigerio_tradicional",
            "bebidas_calientes",
            "bebidas_frias",
        ],
        SectionTitle::Cena => &[
            "plato_principal",
            "vegetariano",
            "acompanantes",
            "vegetales",
            "toppings",
            "bebidas",
        ],
        SectionTitle::Adicional => &["adicionales"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPayload {
    pub texto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPayload {
    pub titulo: SectionTitle,
    pub opciones: BTreeMap<String, Vec<OptionPayload>>,
}

/// Body of `POST /menus/` and `PUT /menus/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMenuRequest {
    pub nombre: String,
    pub sections: Vec<SectionPayload>,
}

/// Menu being composed in the menus screen
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDraft {
    pub nombre: String,
    pub sections: BTreeMap<SectionTitle, BTreeMap<String, Vec<String>>>,
}

impl Default for MenuDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuDraft {
    /// Empty draft with every template group present
    pub fn new() -> Self {
        let sections = SectionTitle::ALL
            .iter()
            .map(|section| {
                let groups = section_template(*section)
                    .iter()
                    .map(|tipo| (tipo.to_string(), Vec::new()))
                    .collect();
                (*section, groups)
            })
            .collect();
        Self {
            nombre: String::new(),
            sections,
        }
    }

    /// Draft pre-filled from an existing menu (for editing)
    pub fn from_menu(menu: &Menu) -> Self {
        let mut draft = Self::new();
        draft.nombre = menu.nombre.clone();
        for section in &menu.sections {
            let groups = draft.sections.entry(section.titulo).or_default();
            for (tipo, options) in &section.opciones {
                groups
                    .entry(tipo.clone())
                    .or_default()
                    .extend(options.iter().map(|o| o.texto.clone()));
            }
        }
        draft
    }

    /// Add an option text; blank and duplicate (case-insensitive) texts are refused
    pub fn add_option(&mut self, section: SectionTitle, tipo: &str, texto: &str) -> Result<(), String> {
        let texto = texto.trim();
        if texto.is_empty() {
            return Err("El texto de la opción no puede estar vacío".into());
        }
        let options = self
            .sections
            .entry(section)
            .or_default()
            .entry(tipo.to_string())
            .or_default();
        if options.iter().any(|o| o.to_lowercase() == texto.to_lowercase()) {
            return Err(format!("La opción \"{}\" ya existe", texto));
        }
        options.push(texto.to_string());
        Ok(())
    }

    pub fn remove_option(&mut self, section: SectionTitle, tipo: &str, index: usize) {
        if let Some(options) = self.sections.get_mut(&section).and_then(|g| g.get_mut(tipo)) {
            if index < options.len() {
                options.remove(index);
            }
        }
    }

    pub fn option_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|groups| groups.values())
            .map(Vec::len)
            .sum()
    }

    /// Build the request body; sections without options are left out
    pub fn to_request(&self) -> Result<CreateMenuRequest, String> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err("El nombre del menú es obligatorio".into());
        }
        if self.option_count() == 0 {
            return Err("Debe agregar al menos una opción al menú".into());
        }

        let sections = self
            .sections
            .iter()
            .filter_map(|(titulo, groups)| {
                let opciones: BTreeMap<String, Vec<OptionPayload>> = groups
                    .iter()
                    .filter(|(_, options)| !options.is_empty())
                    .map(|(tipo, options)| {
                        let payload = options
                            .iter()
                            .map(|texto| OptionPayload { texto: texto.clone() })
                            .collect();
                        (tipo.clone(), payload)
                    })
                    .collect();
                if opciones.is_empty() {
                    None
                } else {
                    Some(SectionPayload {
                        titulo: *titulo,
                        opciones,
                    })
                }
            })
            .collect();

        Ok(CreateMenuRequest {
            nombre: nombre.to_string(),
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_menu::aggregate::fixtures;

    #[test]
    fn test_new_draft_has_template_groups() {
        let draft = MenuDraft::new();
        assert_eq!(draft.sections.len(), 6);
        assert_eq!(draft.sections[&SectionTitle::Adicional].len(), 1);
        assert_eq!(draft.option_count(), 0);
    }

    #[test]
    fn test_add_option_rejects_blank_and_duplicates() {
        let mut draft = MenuDraft::new();
        draft.add_option(SectionTitle::Desayuno, "bebidas", " Café ").unwrap();
        assert!(draft.add_option(SectionTitle::Desayuno, "bebidas", "café").is_err());
        assert!(draft.add_option(SectionTitle::Desayuno, "bebidas", "   ").is_err());
        assert_eq!(draft.sections[&SectionTitle::Desayuno]["bebidas"], vec!["Café"]);

        draft.remove_option(SectionTitle::Desayuno, "bebidas", 5);
        assert_eq!(draft.option_count(), 1);
        draft.remove_option(SectionTitle::Desayuno, "bebidas", 0);
        assert_eq!(draft.option_count(), 0);
    }

    #[test]
    fn test_to_request_skips_empty_sections() {
        let mut draft = MenuDraft::new();
        assert!(draft.to_request().is_err());
        draft.nombre = "Menú lunes".into();
        assert_eq!(
            draft.to_request().unwrap_err(),
            "Debe agregar al menos una opción al menú"
        );

        draft.add_option(SectionTitle::Cena, "bebidas", "Aromática").unwrap();
        let request = draft.to_request().unwrap();
        assert_eq!(request.sections.len(), 1);
        assert_eq!(request.sections[0].titulo, SectionTitle::Cena);
        assert_eq!(request.sections[0].opciones.len(), 1);
    }

    #[test]
    fn test_from_menu_copies_options() {
        let draft = MenuDraft::from_menu(&fixtures::menu());
        assert_eq!(draft.nombre, "Menú semana 12");
        assert_eq!(
            draft.sections[&SectionTitle::Desayuno]["acompanantes"],
            vec!["Papa", "Plátano", "Arroz"]
        );
        assert_eq!(draft.option_count(), 10);
    }
}
