//! Turns rule sequences into concrete constraints for a pair of views

use super::constraint::{Constraint, Priority};
use super::rule::{Relation, Rules};
use super::view::View;

/// Resolve every rule in order against `(primary, secondary, relation)`.
///
/// The output has exactly one constraint per rule, in input order. Nothing is
/// filtered or deduplicated.
pub fn resolve(
    primary: &View,
    secondary: &View,
    relation: Relation,
    rules: &Rules,
) -> Vec<Constraint> {
    resolve_with(primary, secondary, relation, rules, None)
}

/// Like [`resolve`], then apply `priority` to every constraint. The call-level
/// priority replaces any priority set on an individual rule.
pub fn resolve_with(
    primary: &View,
    secondary: &View,
    relation: Relation,
    rules: &Rules,
    priority: Option<Priority>,
) -> Vec<Constraint> {
    rules
        .iter()
        .map(|rule| {
            let constraint = rule.resolve(primary, secondary, relation);
            let constraint = match priority {
                Some(priority) => constraint.with_priority(priority),
                None => constraint,
            };
            tracing::trace!(%constraint, "resolved rule");
            constraint
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::anchor::{DimensionAnchor, XAnchor, YAnchor};
    use crate::layout::rule::{Paired, Unpaired};

    fn sample_rules() -> Rules {
        Rules::from(Paired::new(YAnchor::Top).offset(8.0))
            .with(Paired::new(XAnchor::Left).to(XAnchor::Right))
            .with(Unpaired::new(DimensionAnchor::Height, 20.0))
    }

    #[test]
    fn test_preserves_order_and_count() {
        let a = View::new("a");
        let b = View::new("b");
        let constraints = resolve(&a, &b, Relation::Equal, &sample_rules());
        let names: Vec<String> = constraints.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec!["a.top == b.top + 8", "a.left == b.right", "a.height == 20"]
        );
    }

    #[test]
    fn test_relation_applies_to_every_rule() {
        let a = View::new("a");
        let b = View::new("b");
        let constraints = resolve(&a, &b, Relation::LessOrEqual, &sample_rules());
        assert!(constraints
            .iter()
            .all(|c| c.relation() == Relation::LessOrEqual));
    }

    #[test]
    fn test_call_priority_overrides_rule_priority() {
        let a = View::new("a");
        let b = View::new("b");
        let rules = Rules::from(Paired::new(YAnchor::Top).priority(Priority::LOW));
        let constraints = resolve_with(&a, &b, Relation::Equal, &rules, Some(Priority::HIGH));
        assert_eq!(constraints[0].priority(), Priority::HIGH);

        let constraints = resolve(&a, &b, Relation::Equal, &rules);
        assert_eq!(constraints[0].priority(), Priority::LOW);
    }

    #[test]
    fn test_empty_rules_resolve_to_nothing() {
        let a = View::new("a");
        assert!(resolve(&a, &a, Relation::Equal, &Rules::new()).is_empty());
    }
}
