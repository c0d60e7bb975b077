//! Positioning rules: plain-data descriptions of a single constraint
//!
//! A rule stores which anchors to relate and with what constant, multiplier
//! and priority. Nothing touches a solver until the rule is resolved against
//! a pair of views (see [`super::resolver`]).

use std::fmt;
use std::ops::{Add, AddAssign};

use kasuari::{Strength, WeightedRelation};
use serde::Deserialize;

use super::anchor::{Anchor, DimensionAnchor, XAnchor, YAnchor};
use super::constraint::{Constraint, Operand, Priority};
use super::view::View;

/// How the two sides of a constraint compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    #[default]
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Relation {
    pub(crate) fn weighted(self, strength: Strength) -> WeightedRelation {
        match self {
            Relation::Equal => WeightedRelation::EQ(strength),
            Relation::GreaterOrEqual => WeightedRelation::GE(strength),
            Relation::LessOrEqual => WeightedRelation::LE(strength),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::GreaterOrEqual => ">=",
            Relation::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Relates an anchor of the primary view to an anchor of the same kind on
/// the secondary view:
///
/// `primary.anchor (relation) secondary.other * multiplier + constant`
///
/// The multiplier can only be changed on dimension rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paired<A: Anchor> {
    anchor: A,
    other: A,
    constant: f64,
    multiplier: f64,
    priority: Option<Priority>,
}

impl<A: Anchor> Paired<A> {
    /// Relate `anchor` to the same anchor on the secondary view
    pub fn new(anchor: A) -> Self {
        Self {
            anchor,
            other: anchor,
            constant: 0.0,
            multiplier: 1.0,
            priority: None,
        }
    }

    /// Relate to a different anchor of the same kind on the secondary view
    pub fn to(mut self, other: A) -> Self {
        self.other = other;
        self
    }

    pub fn offset(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn anchor(&self) -> A {
        self.anchor
    }

    pub fn other(&self) -> A {
        self.other
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn priority_override(&self) -> Option<Priority> {
        self.priority
    }

    fn resolve(&self, primary: &View, secondary: &View, relation: Relation) -> Constraint {
        let mut constraint = Constraint::paired(
            Operand::new(primary, self.anchor),
            Operand::new(secondary, self.other),
            relation,
            self.constant,
        );
        // Multiplier first, then priority; each rebuilds the solver constraint.
        if self.multiplier != 1.0 {
            constraint = constraint.rebuild_with_multiplier(self.multiplier);
        }
        if let Some(priority) = self.priority {
            constraint = constraint.with_priority(priority);
        }
        constraint
    }
}

impl Paired<DimensionAnchor> {
    /// Scale the secondary dimension
    pub fn scaled(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Relates a dimension of the primary view to a literal constant. The
/// secondary view is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unpaired {
    anchor: DimensionAnchor,
    constant: f64,
    priority: Option<Priority>,
}

impl Unpaired {
    pub fn new(anchor: DimensionAnchor, constant: f64) -> Self {
        Self {
            anchor,
            constant,
            priority: None,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn anchor(&self) -> DimensionAnchor {
        self.anchor
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    fn resolve(&self, primary: &View, relation: Relation) -> Constraint {
        let constraint =
            Constraint::unpaired(Operand::new(primary, self.anchor), relation, self.constant);
        match self.priority {
            Some(priority) => constraint.with_priority(priority),
            None => constraint,
        }
    }
}

/// A single positioning rule of any shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Horizontal(Paired<XAnchor>),
    Vertical(Paired<YAnchor>),
    Dimension(Paired<DimensionAnchor>),
    Constant(Unpaired),
}

impl Rule {
    /// Build the concrete constraint for this rule. Every call produces a new,
    /// independent constraint.
    pub fn resolve(&self, primary: &View, secondary: &View, relation: Relation) -> Constraint {
        match self {
            Rule::Horizontal(rule) => rule.resolve(primary, secondary, relation),
            Rule::Vertical(rule) => rule.resolve(primary, secondary, relation),
            Rule::Dimension(rule) => rule.resolve(primary, secondary, relation),
            Rule::Constant(rule) => rule.resolve(primary, relation),
        }
    }
}

impl From<Paired<XAnchor>> for Rule {
    fn from(rule: Paired<XAnchor>) -> Self {
        Rule::Horizontal(rule)
    }
}

impl From<Paired<YAnchor>> for Rule {
    fn from(rule: Paired<YAnchor>) -> Self {
        Rule::Vertical(rule)
    }
}

impl From<Paired<DimensionAnchor>> for Rule {
    fn from(rule: Paired<DimensionAnchor>) -> Self {
        Rule::Dimension(rule)
    }
}

impl From<Unpaired> for Rule {
    fn from(rule: Unpaired) -> Self {
        Rule::Constant(rule)
    }
}

/// An ordered sequence of rules. Order carries through to the resolved
/// constraints. Concatenation with `+` is associative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rules(Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.0.push(rule.into());
    }

    /// Builder-style append
    pub fn with(mut self, rule: impl Into<Rule>) -> Self {
        self.push(rule);
        self
    }

    /// Append another sequence, keeping both orders
    pub fn then(mut self, other: Rules) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.0
    }
}

macro_rules! single_rule {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Rules {
                fn from(rule: $ty) -> Self {
                    Rules(vec![rule.into()])
                }
            }
        )*
    };
}

single_rule!(
    Rule,
    Paired<XAnchor>,
    Paired<YAnchor>,
    Paired<DimensionAnchor>,
    Unpaired
);

impl From<Vec<Rule>> for Rules {
    fn from(rules: Vec<Rule>) -> Self {
        Rules(rules)
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Rules(iter.into_iter().collect())
    }
}

impl FromIterator<Rules> for Rules {
    fn from_iter<I: IntoIterator<Item = Rules>>(iter: I) -> Self {
        Rules(iter.into_iter().flat_map(|rules| rules.0).collect())
    }
}

impl Extend<Rule> for Rules {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Rules {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for Rules {
    type Output = Rules;

    fn add(self, rhs: Rules) -> Rules {
        self.then(rhs)
    }
}

impl AddAssign for Rules {
    fn add_assign(&mut self, rhs: Rules) {
        self.0.extend(rhs.0);
    }
}
