use super::selection::Selections;
use crate::domain::a007_menu::{Menu, SectionTitle};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// At most `value` options
    Max,
    /// Exactly `value` options at submit time, at most `value` while picking
    Exact,
}

/// Limit on how many options may be picked inside one option group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalityRule {
    pub kind: RuleKind,
    pub value: usize,
}

impl CardinalityRule {
    pub const fn max(value: usize) -> Self {
        Self {
            kind: RuleKind::Max,
            value,
        }
    }

    pub const fn exact(value: usize) -> Self {
        Self {
            kind: RuleKind::Exact,
            value,
        }
    }

    /// Whether one more option may be inserted into a group of `current` size
    pub fn allows_insert(&self, current: usize) -> bool {
        current < self.value
    }

    pub fn is_satisfied_by(&self, count: usize) -> bool {
        match self.kind {
            RuleKind::Max => count <= self.value,
            RuleKind::Exact => count == self.value,
        }
    }
}

impl fmt::Display for CardinalityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.value == 1 { "opción" } else { "opciones" };
        match self.kind {
            RuleKind::Max => write!(f, "máximo {} {}", self.value, noun),
            RuleKind::Exact => write!(f, "exactamente {} {}", self.value, noun),
        }
    }
}

/// Cardinality rules keyed by (section, option type)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: BTreeMap<(SectionTitle, String), CardinalityRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section: SectionTitle, option_type: &str, rule: CardinalityRule) -> Self {
        self.rules.insert((section, option_type.to_string()), rule);
        self
    }

    /// Rules applied by the hospital kitchen
    pub fn hospital_default() -> Self {
        use SectionTitle::*;
        Self::new()
            .with(Desayuno, "acompanantes", CardinalityRule::exact(2))
            .with(Desayuno, "bebidas", CardinalityRule::max(1))
            .with(Algo, "bebidas_calientes", CardinalityRule::max(1))
            .with(Algo, "bebidas_frias", CardinalityRule::max(1))
            .with(Almuerzo, "acompanantes", CardinalityRule::exact(2))
            .with(Almuerzo, "adicionales", CardinalityRule::max(1))
            .with(Almuerzo, "bebidas", CardinalityRule::max(1))
            .with(Onces, "bebidas_calientes", CardinalityRule::max(1))
            .with(Onces, "bebidas_frias", CardinalityRule::max(1))
            .with(Cena, "acompanantes", CardinalityRule::exact(2))
            .with(Cena, "bebidas", CardinalityRule::max(1))
            .with(Adicional, "adicionales", CardinalityRule::max(1))
    }

    pub fn get(&self, section: SectionTitle, option_type: &str) -> Option<CardinalityRule> {
        self.rules
            .get(&(section, option_type.to_string()))
            .copied()
    }

    /// Rules in section order, then option type
    pub fn iter(&self) -> impl Iterator<Item = (SectionTitle, &str, CardinalityRule)> {
        self.rules
            .iter()
            .map(|((section, tipo), rule)| (*section, tipo.as_str(), *rule))
    }

    /// Rules of the option groups `menu` actually offers
    pub fn restricted_to(&self, menu: &Menu) -> RuleTable {
        self.retained(|section, option_type| {
            menu.section(section)
                .and_then(|s| s.opciones.get(option_type))
                .is_some_and(|options| !options.is_empty())
        })
    }

    /// Rules of the sections the order picks something from
    pub fn for_ordered_sections(&self, selections: &Selections) -> RuleTable {
        self.retained(|section, _| selections.iter().any(|(picked, _, _)| picked == section))
    }

    /// Rules an order on `menu` is checked against before it is sent
    pub fn for_order(&self, menu: &Menu, selections: &Selections) -> RuleTable {
        self.restricted_to(menu).for_ordered_sections(selections)
    }

    fn retained(&self, keep: impl Fn(SectionTitle, &str) -> bool) -> RuleTable {
        RuleTable {
            rules: self
                .rules
                .iter()
                .filter(|((section, option_type), _)| keep(*section, option_type))
                .map(|(key, rule)| (key.clone(), *rule))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_menu::aggregate::fixtures;

    #[test]
    fn test_hospital_default_lookup() {
        let table = RuleTable::hospital_default();
        assert_eq!(
            table.get(SectionTitle::Desayuno, "acompanantes"),
            Some(CardinalityRule::exact(2))
        );
        assert_eq!(
            table.get(SectionTitle::Almuerzo, "adicionales"),
            Some(CardinalityRule::max(1))
        );
        assert_eq!(table.get(SectionTitle::Almuerzo, "plato_principal"), None);
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_iter_is_ordered_by_section() {
        let table = RuleTable::hospital_default();
        let sections: Vec<SectionTitle> = table.iter().map(|(s, _, _)| s).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
        assert_eq!(sections.first(), Some(&SectionTitle::Desayuno));
        assert_eq!(sections.last(), Some(&SectionTitle::Adicional));
    }

    #[test]
    fn test_rule_semantics() {
        let exact = CardinalityRule::exact(2);
        assert!(exact.allows_insert(1));
        assert!(!exact.allows_insert(2));
        assert!(!exact.is_satisfied_by(1));
        assert!(exact.is_satisfied_by(2));

        let max = CardinalityRule::max(1);
        assert!(max.is_satisfied_by(0));
        assert!(!max.is_satisfied_by(2));
        assert_eq!(max.to_string(), "máximo 1 opción");
        assert_eq!(exact.to_string(), "exactamente 2 opciones");
    }

    #[test]
    fn test_restricted_to_menu_groups() {
        // breakfast + lunch only, and an empty toppings group
        let menu = fixtures::menu();
        let table = RuleTable::hospital_default().restricted_to(&menu);

        assert_eq!(table.get(SectionTitle::Cena, "acompanantes"), None);
        assert_eq!(table.get(SectionTitle::Onces, "bebidas_frias"), None);
        assert_eq!(
            table.get(SectionTitle::Desayuno, "acompanantes"),
            Some(CardinalityRule::exact(2))
        );
        assert_eq!(
            table.get(SectionTitle::Almuerzo, "adicionales"),
            Some(CardinalityRule::max(1))
        );
        // Almuerzo has no "bebidas" group in this menu
        assert_eq!(table.get(SectionTitle::Almuerzo, "bebidas"), None);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_for_ordered_sections_keeps_touched_sections() {
        let selections: Selections = serde_json::from_value(serde_json::json!({
            "Almuerzo": { "adicionales": [10] }
        }))
        .unwrap();
        let table = RuleTable::hospital_default().for_ordered_sections(&selections);
        assert!(table.iter().all(|(section, _, _)| section == SectionTitle::Almuerzo));
        assert_eq!(table.len(), 3);

        let menu = fixtures::menu();
        let order = RuleTable::hospital_default().for_order(&menu, &selections);
        assert_eq!(order.get(SectionTitle::Almuerzo, "bebidas"), None);
        assert_eq!(order.len(), 2);
    }
}
