use super::rules::{CardinalityRule, RuleKind, RuleTable};
use super::selection::Selections;
use crate::domain::a007_menu::SectionTitle;
use std::fmt;

/// Option group whose selection count breaks its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub section: SectionTitle,
    pub option_type: String,
    pub rule: CardinalityRule,
    pub actual: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.rule.kind {
            RuleKind::Exact => "Debe seleccionar",
            RuleKind::Max => "Puede seleccionar",
        };
        write!(
            f,
            "{} - {}: {} {} (seleccionadas: {})",
            self.section, self.option_type, verb, self.rule, self.actual
        )
    }
}

/// Check every rule of `rules` against `selections`.
///
/// Violations come out ordered by section, then option type. Groups
/// without a selection count as zero.
pub fn validate(selections: &Selections, rules: &RuleTable) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|(section, option_type, rule)| {
            let actual = selections.count(section, option_type);
            (!rule.is_satisfied_by(actual)).then(|| Violation {
                section,
                option_type: option_type.to_string(),
                rule,
                actual,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_menu::MenuOptionId;
    use crate::usecases::u501_realizar_pedido::SelectionModel;
    use std::sync::Arc;

    fn exact_only() -> RuleTable {
        RuleTable::new()
            .with(SectionTitle::Desayuno, "acompanantes", CardinalityRule::exact(2))
            .with(SectionTitle::Almuerzo, "acompanantes", CardinalityRule::exact(2))
            .with(SectionTitle::Cena, "acompanantes", CardinalityRule::exact(2))
    }

    #[test]
    fn test_empty_selection_fails_every_exact_rule() {
        let violations = validate(&Selections::default(), &exact_only());
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.actual == 0));
        let sections: Vec<_> = violations.iter().map(|v| v.section).collect();
        assert_eq!(
            sections,
            vec![SectionTitle::Desayuno, SectionTitle::Almuerzo, SectionTitle::Cena]
        );
    }

    #[test]
    fn test_exact_group_filled_has_no_violation() {
        let rules = Arc::new(exact_only());
        let mut m = SelectionModel::new(rules.clone());
        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(1), true);
        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(2), true);
        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(3), true);

        let violations = validate(&m.snapshot(), &rules);
        assert!(violations.iter().all(|v| v.section != SectionTitle::Desayuno));
    }

    #[test]
    fn test_single_unmet_rule_single_message() {
        let rules = Arc::new(RuleTable::hospital_default());
        let mut m = SelectionModel::new(rules.clone());
        for section in [SectionTitle::Almuerzo, SectionTitle::Cena] {
            m.toggle(section, "acompanantes", MenuOptionId(1), true);
            m.toggle(section, "acompanantes", MenuOptionId(2), true);
        }
        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(1), true);

        let violations = validate(&m.snapshot(), &rules);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "Desayuno - acompanantes: Debe seleccionar exactamente 2 opciones (seleccionadas: 1)"
        );
    }

    #[test]
    fn test_max_violation_from_unchecked_data() {
        let selections: Selections = serde_json::from_value(serde_json::json!({
            "Almuerzo": { "adicionales": [10, 11] }
        }))
        .unwrap();
        let rules = RuleTable::new().with(SectionTitle::Almuerzo, "adicionales", CardinalityRule::max(1));
        let violations = validate(&selections, &rules);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "Almuerzo - adicionales: Puede seleccionar máximo 1 opción (seleccionadas: 2)"
        );
    }

    #[test]
    fn test_exact_violation_on_overcount() {
        let selections: Selections = serde_json::from_value(serde_json::json!({
            "Cena": { "acompanantes": [12, 13, 14] }
        }))
        .unwrap();
        let rules = RuleTable::new().with(SectionTitle::Cena, "acompanantes", CardinalityRule::exact(2));
        let violations = validate(&selections, &rules);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].actual, 3);
        assert_eq!(
            violations[0].to_string(),
            "Cena - acompanantes: Debe seleccionar exactamente 2 opciones (seleccionadas: 3)"
        );
    }

    #[test]
    fn test_validate_is_deterministic() {
        let rules = RuleTable::hospital_default();
        let selections = Selections::default();
        assert_eq!(validate(&selections, &rules), validate(&selections, &rules));
    }
}
