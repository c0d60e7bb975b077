//! Views: the rectangles that rules position and size

use std::fmt;
use std::sync::Arc;

use kasuari::Variable;

use super::constraint::Constraint;
use super::resolver::resolve_with;
use super::rule::{Relation, Rules};
use super::types::EdgeInsets;
use super::Priority;

/// A named rectangle described by four solver variables.
///
/// Creating a view touches no solver. Clones share the same variables, so a
/// clone is the same view as far as any engine is concerned.
#[derive(Clone)]
pub struct View {
    name: Arc<str>,
    x: Variable,
    y: Variable,
    width: Variable,
    height: Variable,
    safe_area: EdgeInsets,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: name.into(),
            x: Variable::new(),
            y: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
            safe_area: EdgeInsets::zero(),
        }
    }

    /// Set the safe-area insets used by the `Safe*` anchors
    pub fn with_safe_area(mut self, insets: EdgeInsets) -> Self {
        self.safe_area = insets;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn safe_area(&self) -> EdgeInsets {
        self.safe_area
    }

    pub fn x(&self) -> Variable {
        self.x
    }

    pub fn y(&self) -> Variable {
        self.y
    }

    pub fn width(&self) -> Variable {
        self.width
    }

    pub fn height(&self) -> Variable {
        self.height
    }

    /// Resolve `rules` with this view as the primary element and `other` as
    /// the secondary, using `Relation::Equal`.
    pub fn position_relative_to(&self, other: &View, rules: &Rules) -> Vec<Constraint> {
        self.position_relative_to_with(other, rules, Relation::Equal, None)
    }

    /// Like [`View::position_relative_to`] with an explicit relation and an
    /// optional priority applied to every resulting constraint.
    pub fn position_relative_to_with(
        &self,
        other: &View,
        rules: &Rules,
        relation: Relation,
        priority: Option<Priority>,
    ) -> Vec<Constraint> {
        resolve_with(self, other, relation, rules, priority)
    }

    /// Resolve `rules` with this view as both elements, for sizes and ratios
    pub fn self_constrain(&self, rules: &Rules) -> Vec<Constraint> {
        self.self_constrain_with(rules, Relation::Equal, None)
    }

    pub fn self_constrain_with(
        &self,
        rules: &Rules,
        relation: Relation,
        priority: Option<Priority>,
    ) -> Vec<Constraint> {
        resolve_with(self, self, relation, rules, priority)
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("safe_area", &self.safe_area)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_same_view() {
        let view = View::new("card");
        let copy = view.clone();
        assert_eq!(view, copy);
        assert_eq!(copy.name(), "card");
    }

    #[test]
    fn test_same_name_is_different_view() {
        assert_ne!(View::new("card"), View::new("card"));
    }

    #[test]
    fn test_safe_area_defaults_to_zero() {
        let view = View::new("root");
        assert_eq!(view.safe_area(), EdgeInsets::zero());
        let view = view.with_safe_area(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
        assert_eq!(view.safe_area().top, 44.0);
    }
}
