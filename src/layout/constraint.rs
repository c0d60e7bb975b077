//! Concrete constraints: resolved rules bound to solver variables

use std::fmt;
use std::sync::Arc;

use kasuari::{Expression, Strength};
use serde::Deserialize;

use super::anchor::{Anchor, AnchorRef};
use super::rule::Relation;
use super::view::View;

/// Solver weight of a constraint, in `1..=1000`.
///
/// `1000` is required; anything lower may be relaxed by the solver. All
/// non-required priorities map below `Strength::STRONG`, so frame suggestions
/// made through the engine outrank them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "f64")]
pub struct Priority(f64);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const HIGH: Priority = Priority(750.0);
    pub const LOW: Priority = Priority(250.0);

    /// Create a priority, clamping into `1..=1000`
    pub fn new(value: f64) -> Self {
        let clamped = if value.is_nan() {
            Self::REQUIRED.0
        } else {
            value.clamp(1.0, 1000.0)
        };
        if clamped != value {
            tracing::warn!(value, clamped, "priority out of range");
        }
        Priority(clamped)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }

    /// Highest priority the solver accepts for edit variables
    pub const MAX_OPTIONAL: Priority = Priority(999.0);

    /// This priority, lowered to [`Priority::MAX_OPTIONAL`] if it is required
    pub fn below_required(self) -> Self {
        if self.is_required() {
            tracing::warn!(
                value = self.0,
                clamped = Self::MAX_OPTIONAL.0,
                "priority must be below required"
            );
            Self::MAX_OPTIONAL
        } else {
            self
        }
    }

    pub(crate) fn strength(self) -> Strength {
        if self.is_required() {
            Strength::REQUIRED
        } else {
            Strength::MEDIUM.mul_f64(self.0)
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        Priority::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of a constraint: an anchor of a named view
#[derive(Debug, Clone)]
pub struct Operand {
    view: Arc<str>,
    anchor: AnchorRef,
    expression: Expression,
}

impl Operand {
    pub(crate) fn new<A: Anchor>(view: &View, anchor: A) -> Self {
        Self {
            view: view.shared_name(),
            anchor: anchor.erase(),
            expression: anchor.expression(view),
        }
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn anchor(&self) -> AnchorRef {
        self.anchor
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.view, self.anchor)
    }
}

/// A resolved relation between two anchors, or between an anchor and a
/// constant:
///
/// `first (relation) second * multiplier + constant`
///
/// Each resolution creates a fresh solver constraint. Cloning a `Constraint`
/// does not; the clone refers to the same solver constraint.
#[derive(Debug, Clone)]
pub struct Constraint {
    first: Operand,
    second: Option<Operand>,
    relation: Relation,
    constant: f64,
    multiplier: f64,
    priority: Priority,
    raw: kasuari::Constraint,
}

impl Constraint {
    pub(crate) fn paired(
        first: Operand,
        second: Operand,
        relation: Relation,
        constant: f64,
    ) -> Self {
        Self::build(first, Some(second), relation, constant, 1.0, Priority::REQUIRED)
    }

    pub(crate) fn unpaired(first: Operand, relation: Relation, constant: f64) -> Self {
        Self::build(first, None, relation, constant, 1.0, Priority::REQUIRED)
    }

    fn build(
        first: Operand,
        second: Option<Operand>,
        relation: Relation,
        constant: f64,
        multiplier: f64,
        priority: Priority,
    ) -> Self {
        let lhs = first.expression.clone();
        let weighted = relation.weighted(priority.strength());
        let raw = match &second {
            Some(second) => lhs | weighted | second.expression.clone() * multiplier + constant,
            None => lhs | weighted | constant,
        };
        Self {
            first,
            second,
            relation,
            constant,
            multiplier,
            priority,
            raw,
        }
    }

    /// Rebuild with a different priority. The solver constraint is immutable,
    /// so this always produces a new one.
    pub fn with_priority(self, priority: Priority) -> Self {
        Self::build(
            self.first,
            self.second,
            self.relation,
            self.constant,
            self.multiplier,
            priority,
        )
    }

    /// Only reachable from dimension rules.
    pub(crate) fn rebuild_with_multiplier(self, multiplier: f64) -> Self {
        Self::build(
            self.first,
            self.second,
            self.relation,
            self.constant,
            multiplier,
            self.priority,
        )
    }

    pub fn first(&self) -> &Operand {
        &self.first
    }

    /// `None` for constraints against a literal constant
    pub fn second(&self) -> Option<&Operand> {
        self.second.as_ref()
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The underlying solver constraint
    pub fn raw(&self) -> &kasuari::Constraint {
        &self.raw
    }

    /// True when both constraints describe the same relation between the same
    /// named anchors, regardless of whether they are the same solver object.
    pub fn same_parameters(&self, other: &Constraint) -> bool {
        self.first.view == other.first.view
            && self.first.anchor == other.first.anchor
            && self.second.as_ref().map(|s| (&s.view, s.anchor))
                == other.second.as_ref().map(|s| (&s.view, s.anchor))
            && self.relation == other.relation
            && self.constant == other.constant
            && self.multiplier == other.multiplier
            && self.priority == other.priority
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.first, self.relation)?;
        match &self.second {
            Some(second) => {
                write!(f, "{}", second)?;
                if self.multiplier != 1.0 {
                    write!(f, " * {}", self.multiplier)?;
                }
                if self.constant > 0.0 {
                    write!(f, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(f, " - {}", -self.constant)?;
                }
            }
            None => write!(f, "{}", self.constant)?,
        }
        if !self.priority.is_required() {
            write!(f, " @{}", self.priority)?;
        }
        Ok(())
    }
}
