//! Declarative positioning rules and their activation
//!
//! Rules are plain values built by the functions in [`library`] (or directly
//! from [`Paired`] and [`Unpaired`]), concatenated into [`Rules`], resolved
//! against a pair of [`View`]s into [`Constraint`]s, and finally handed to a
//! [`LayoutEngine`] which feeds them to the Cassowary solver.

pub mod anchor;
pub mod arrange;
pub mod batch;
pub mod config;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod library;
pub mod resolver;
pub mod rule;
pub mod types;
pub mod view;

pub use anchor::{Anchor, AnchorRef, DimensionAnchor, XAnchor, YAnchor};
pub use arrange::Arrange;
pub use batch::{flatten, ConstraintBatch};
pub use config::LayoutConfig;
pub use constraint::{Constraint, Operand, Priority};
pub use engine::LayoutEngine;
pub use error::EngineError;
pub use resolver::{resolve, resolve_with};
pub use rule::{Paired, Relation, Rule, Rules, Unpaired};
pub use types::{EdgeInsets, Rect};
pub use view::View;
