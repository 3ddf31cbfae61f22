use super::SectionTitle;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

crate::aggregate_id!(
    /// Menu identifier
    MenuId
);
crate::aggregate_id!(MenuSectionId);
crate::aggregate_id!(
    /// Identifier of a single selectable dish/drink
    MenuOptionId
);

/// A selectable option inside an option group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub id: MenuOptionId,
    pub texto: String,
}

/// Section of a menu: option type → ordered options
///
/// Immutable once fetched; the order of each option list is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub id: MenuSectionId,
    pub titulo: SectionTitle,
    #[serde(default)]
    pub opciones: BTreeMap<String, Vec<MenuOption>>,
}

impl MenuSection {
    /// Non-empty option groups in display order
    pub fn option_groups(&self) -> impl Iterator<Item = (&str, &[MenuOption])> {
        self.opciones
            .iter()
            .filter(|(_, options)| !options.is_empty())
            .map(|(tipo, options)| (tipo.as_str(), options.as_slice()))
    }

    pub fn option_count(&self) -> usize {
        self.opciones.values().map(Vec::len).sum()
    }
}

/// Hospital menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub nombre: String,
    #[serde(default)]
    pub sections: Vec<MenuSection>,
}

impl Menu {
    pub fn section(&self, titulo: SectionTitle) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.titulo == titulo)
    }

    /// Locate an option: (section, option type, option)
    pub fn find_option(&self, id: MenuOptionId) -> Option<(&MenuSection, &str, &MenuOption)> {
        self.sections.iter().find_map(|section| {
            section.opciones.iter().find_map(|(tipo, options)| {
                options
                    .iter()
                    .find(|o| o.id == id)
                    .map(|o| (section, tipo.as_str(), o))
            })
        })
    }

    /// Sections sorted by meal order
    pub fn ordered_sections(&self) -> Vec<&MenuSection> {
        let mut sections: Vec<&MenuSection> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.titulo);
        sections
    }
}

impl AggregateRoot for Menu {
    type Id = MenuId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "menus"
    }

    fn element_name() -> &'static str {
        "Menú"
    }

    fn list_name() -> &'static str {
        "Menús"
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn opts(items: &[(i64, &str)]) -> Vec<MenuOption> {
        items
            .iter()
            .map(|(id, texto)| MenuOption {
                id: MenuOptionId(*id),
                texto: texto.to_string(),
            })
            .collect()
    }

    /// Menu with a breakfast and a lunch section
    pub fn menu() -> Menu {
        let mut desayuno = BTreeMap::new();
        desayuno.insert(
            "acompanantes".to_string(),
            opts(&[(1, "Papa"), (2, "Plátano"), (3, "Arroz")]),
        );
        desayuno.insert("bebidas".to_string(), opts(&[(4, "Café"), (5, "Chocolate")]));
        desayuno.insert("toppings".to_string(), Vec::new());

        let mut almuerzo = BTreeMap::new();
        almuerzo.insert(
            "adicionales".to_string(),
            opts(&[(10, "Postre"), (11, "Fruta")]),
        );
        almuerzo.insert(
            "acompanantes".to_string(),
            opts(&[(12, "Yuca"), (13, "Ensalada"), (14, "Arroz")]),
        );

        Menu {
            id: MenuId(1),
            nombre: "Menú semana 12".into(),
            sections: vec![
                MenuSection {
                    id: MenuSectionId(20),
                    titulo: SectionTitle::Almuerzo,
                    opciones: almuerzo,
                },
                MenuSection {
                    id: MenuSectionId(10),
                    titulo: SectionTitle::Desayuno,
                    opciones: desayuno,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_menu_from_backend_shape() {
        let menu: Menu = serde_json::from_value(serde_json::json!({
            "id": 7,
            "nombre": "General",
            "sections": [
                { "id": 1, "titulo": "desayuno", "opciones": {
                    "bebidas": [{ "id": 100, "texto": "Café" }]
                }}
            ]
        }))
        .unwrap();
        assert_eq!(menu.sections[0].titulo, SectionTitle::Desayuno);
        assert_eq!(menu.sections[0].option_count(), 1);
    }

    #[test]
    fn test_find_option_and_order() {
        let menu = fixtures::menu();
        let (section, tipo, option) = menu.find_option(MenuOptionId(2)).unwrap();
        assert_eq!(section.titulo, SectionTitle::Desayuno);
        assert_eq!(tipo, "acompanantes");
        assert_eq!(option.texto, "Plátano");
        assert!(menu.find_option(MenuOptionId(999)).is_none());

        let titles: Vec<_> = menu.ordered_sections().iter().map(|s| s.titulo).collect();
        assert_eq!(titles, vec![SectionTitle::Desayuno, SectionTitle::Almuerzo]);
    }

    #[test]
    fn test_option_groups_skip_empty() {
        let menu = fixtures::menu();
        let desayuno = menu.section(SectionTitle::Desayuno).unwrap();
        let tipos: Vec<_> = desayuno.option_groups().map(|(t, _)| t).collect();
        assert_eq!(tipos, vec!["acompanantes", "bebidas"]);
    }
}
