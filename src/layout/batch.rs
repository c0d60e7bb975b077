//! Collecting constraint groups for a single activation

use super::constraint::Constraint;

/// Flatten groups of constraints, keeping group order and the order inside
/// each group.
pub fn flatten<I, G>(groups: I) -> Vec<Constraint>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = Constraint>,
{
    groups.into_iter().flatten().collect()
}

/// Accumulates groups of constraints to be activated together.
///
/// ```
/// use anchor_rules::layout::{library, ConstraintBatch, View};
///
/// let root = View::new("root");
/// let card = View::new("card");
/// let mut batch = ConstraintBatch::new();
/// batch
///     .push(card.position_relative_to(&root, &library::inset(16.0)))
///     .push(card.self_constrain(&library::aspect_ratio(0.5)));
/// assert_eq!(batch.finish().len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct ConstraintBatch {
    constraints: Vec<Constraint>,
    groups: usize,
}

impl ConstraintBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one group
    pub fn push(&mut self, group: impl IntoIterator<Item = Constraint>) -> &mut Self {
        self.constraints.extend(group);
        self.groups += 1;
        self
    }

    /// Append several groups
    pub fn push_all<I, G>(&mut self, groups: I) -> &mut Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = Constraint>,
    {
        for group in groups {
            self.push(group);
        }
        self
    }

    /// Number of groups pushed so far
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Number of constraints collected so far
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The flat list, in push order
    pub fn finish(self) -> Vec<Constraint> {
        self.constraints
    }
}

impl<G: IntoIterator<Item = Constraint>> Extend<G> for ConstraintBatch {
    fn extend<I: IntoIterator<Item = G>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<G: IntoIterator<Item = Constraint>> FromIterator<G> for ConstraintBatch {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        let mut batch = ConstraintBatch::new();
        batch.push_all(iter);
        batch
    }
}
