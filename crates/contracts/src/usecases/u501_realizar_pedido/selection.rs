use super::rules::RuleTable;
use crate::domain::a007_menu::{MenuOptionId, SectionTitle};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Picked option ids: section → option type → ids
///
/// Serializes to the `opciones` shape of the create-order request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<SectionTitle, BTreeMap<String, BTreeSet<MenuOptionId>>>);

impl Selections {
    pub fn count(&self, section: SectionTitle, option_type: &str) -> usize {
        self.group(section, option_type).map_or(0, BTreeSet::len)
    }

    pub fn contains(&self, section: SectionTitle, option_type: &str, id: MenuOptionId) -> bool {
        self.group(section, option_type)
            .is_some_and(|set| set.contains(&id))
    }

    pub fn total(&self) -> usize {
        self.0
            .values()
            .flat_map(|groups| groups.values())
            .map(BTreeSet::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every picked option as (section, option type, id), in section order
    pub fn iter(&self) -> impl Iterator<Item = (SectionTitle, &str, MenuOptionId)> + '_ {
        self.0.iter().flat_map(|(section, groups)| {
            groups.iter().flat_map(move |(tipo, ids)| {
                ids.iter().map(move |id| (*section, tipo.as_str(), *id))
            })
        })
    }

    fn group(&self, section: SectionTitle, option_type: &str) -> Option<&BTreeSet<MenuOptionId>> {
        self.0.get(&section).and_then(|groups| groups.get(option_type))
    }

    fn group_mut(&mut self, section: SectionTitle, option_type: &str) -> &mut BTreeSet<MenuOptionId> {
        self.0
            .entry(section)
            .or_default()
            .entry(option_type.to_string())
            .or_default()
    }

    fn remove(&mut self, section: SectionTitle, option_type: &str, id: MenuOptionId) {
        let Some(groups) = self.0.get_mut(&section) else {
            return;
        };
        if let Some(ids) = groups.get_mut(option_type) {
            ids.remove(&id);
            if ids.is_empty() {
                groups.remove(option_type);
            }
        }
        if groups.is_empty() {
            self.0.remove(&section);
        }
    }
}

/// Options picked for one order, capped by the cardinality rules on insert
#[derive(Debug, Clone)]
pub struct SelectionModel {
    rules: Arc<RuleTable>,
    selections: Selections,
}

impl SelectionModel {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self {
            rules,
            selections: Selections::default(),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Select (`desired = true`) or deselect an option.
    ///
    /// Returns `false` only when a selection is refused because the group
    /// already holds as many options as its rule allows.
    pub fn toggle(
        &mut self,
        section: SectionTitle,
        option_type: &str,
        id: MenuOptionId,
        desired: bool,
    ) -> bool {
        if !desired {
            self.selections.remove(section, option_type, id);
            return true;
        }
        if self.selections.contains(section, option_type, id) {
            return true;
        }
        if let Some(rule) = self.rules.get(section, option_type) {
            if !rule.allows_insert(self.selections.count(section, option_type)) {
                return false;
            }
        }
        self.selections.group_mut(section, option_type).insert(id);
        true
    }

    pub fn contains(&self, section: SectionTitle, option_type: &str, id: MenuOptionId) -> bool {
        self.selections.contains(section, option_type, id)
    }

    pub fn count(&self, section: SectionTitle, option_type: &str) -> usize {
        self.selections.count(section, option_type)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Owned copy, unaffected by later toggles
    pub fn snapshot(&self) -> Selections {
        self.selections.clone()
    }

    pub fn clear(&mut self) {
        self.selections = Selections::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_realizar_pedido::rules::CardinalityRule;

    fn model() -> SelectionModel {
        SelectionModel::new(Arc::new(RuleTable::hospital_default()))
    }

    const PAPA: MenuOptionId = MenuOptionId(1);
    const PLATANO: MenuOptionId = MenuOptionId(2);
    const ARROZ: MenuOptionId = MenuOptionId(3);

    #[test]
    fn test_exact_rule_caps_insertion() {
        let mut m = model();
        assert!(m.toggle(SectionTitle::Desayuno, "acompanantes", PAPA, true));
        assert!(m.toggle(SectionTitle::Desayuno, "acompanantes", PLATANO, true));
        assert!(!m.toggle(SectionTitle::Desayuno, "acompanantes", ARROZ, true));

        assert_eq!(m.count(SectionTitle::Desayuno, "acompanantes"), 2);
        assert!(m.contains(SectionTitle::Desayuno, "acompanantes", PAPA));
        assert!(m.contains(SectionTitle::Desayuno, "acompanantes", PLATANO));
        assert!(!m.contains(SectionTitle::Desayuno, "acompanantes", ARROZ));
    }

    #[test]
    fn test_max_rule_swap() {
        let mut m = model();
        let a = MenuOptionId(10);
        let b = MenuOptionId(11);
        assert!(m.toggle(SectionTitle::Almuerzo, "adicionales", a, true));
        assert!(!m.toggle(SectionTitle::Almuerzo, "adicionales", b, true));
        assert!(m.toggle(SectionTitle::Almuerzo, "adicionales", a, false));
        assert!(m.toggle(SectionTitle::Almuerzo, "adicionales", b, true));
        assert!(m.contains(SectionTitle::Almuerzo, "adicionales", b));
        assert_eq!(m.count(SectionTitle::Almuerzo, "adicionales"), 1);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut m = model();
        assert!(m.toggle(SectionTitle::Cena, "bebidas", MenuOptionId(7), true));
        let once = m.snapshot();
        assert!(m.toggle(SectionTitle::Cena, "bebidas", MenuOptionId(7), true));
        assert_eq!(m.snapshot(), once);

        assert!(m.toggle(SectionTitle::Cena, "vegetales", MenuOptionId(8), false));
        assert_eq!(m.snapshot(), once);
    }

    #[test]
    fn test_unruled_groups_are_unlimited() {
        let mut m = model();
        for id in 0..20 {
            assert!(m.toggle(SectionTitle::Almuerzo, "toppings", MenuOptionId(id), true));
        }
        assert_eq!(m.count(SectionTitle::Almuerzo, "toppings"), 20);
    }

    #[test]
    fn test_count_never_exceeds_bound() {
        let table = RuleTable::new().with(SectionTitle::Onces, "bebidas_frias", CardinalityRule::max(2));
        let mut m = SelectionModel::new(Arc::new(table));
        // deterministic pseudo-random sequence of toggles
        let mut seed: u64 = 42;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let id = MenuOptionId(((seed >> 33) % 6) as i64);
            let desired = (seed >> 17) & 1 == 1;
            m.toggle(SectionTitle::Onces, "bebidas_frias", id, desired);
            assert!(m.count(SectionTitle::Onces, "bebidas_frias") <= 2);
        }
    }

    #[test]
    fn test_snapshot_is_decoupled() {
        let mut m = model();
        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(4), true);
        let snap = m.snapshot();
        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(4), false);
        assert!(m.is_empty());
        assert_eq!(snap.count(SectionTitle::Desayuno, "bebidas"), 1);

        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(5), true);
        m.clear();
        assert!(m.is_empty());
    }

    #[test]
    fn test_selections_wire_shape() {
        let mut m = model();
        m.toggle(SectionTitle::Desayuno, "acompanantes", PLATANO, true);
        m.toggle(SectionTitle::Desayuno, "acompanantes", PAPA, true);
        m.toggle(SectionTitle::Cena, "bebidas", MenuOptionId(9), true);
        let json = serde_json::to_value(m.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Desayuno": { "acompanantes": [1, 2] },
                "Cena": { "bebidas": [9] }
            })
        );
        let all: Vec<_> = m.snapshot().iter().map(|(s, _, id)| (s, id.value())).collect();
        assert_eq!(
            all,
            vec![
                (SectionTitle::Desayuno, 1),
                (SectionTitle::Desayuno, 2),
                (SectionTitle::Cena, 9)
            ]
        );
    }
}
