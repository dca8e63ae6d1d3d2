use super::approx_constant::ApproxConstantRule;
use super::constant_condition::ConstantConditionRule;
use super::Rule;

/// Get all registered rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ApproxConstantRule),
        Box::new(ConstantConditionRule),
    ]
}

/// Get a rule by its ID
pub fn get_rule(id: &str) -> Option<Box<dyn Rule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

/// Whether a rule with the given ID exists
pub fn has_rule(id: &str) -> bool {
    all_rules().iter().any(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_ids_are_unique() {
        let rules = all_rules();
        let mut ids: Vec<_> = rules.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn test_get_rule() {
        assert!(get_rule("approx-constant").is_some());
        assert!(get_rule("constant-condition").is_some());
        assert!(get_rule("no-such-rule").is_none());
    }

    #[test]
    fn test_has_rule() {
        assert!(has_rule("approx-constant"));
        assert!(!has_rule("approx_constant"));
    }
}
