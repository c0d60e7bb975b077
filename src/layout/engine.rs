//! Solver integration: activating constraints and reading frames
//!
//! This module wraps the kasuari Cassowary solver. It is the only place that
//! mutates solver state; rules and resolution stay pure.

use std::collections::{HashMap, HashSet};

use kasuari::{AddConstraintError, Solver, Variable};

use super::batch::{flatten, ConstraintBatch};
use super::config::LayoutConfig;
use super::constraint::Constraint;
use super::error::EngineError;
use super::types::Rect;
use super::view::View;

/// Owns a solver and the constraints activated in it.
///
/// Single-threaded: every call completes synchronously on the caller's thread.
pub struct LayoutEngine {
    solver: Solver,
    config: LayoutConfig,
    /// Activation order, for diagnostics and deactivation
    active: Vec<Constraint>,
    edits: HashSet<Variable>,
    values: HashMap<Variable, f64>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            solver: Solver::new(),
            config,
            active: Vec::new(),
            edits: HashSet::new(),
            values: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Active constraints in activation order
    pub fn active(&self) -> &[Constraint] {
        &self.active
    }

    /// Activate one sequence of constraints.
    ///
    /// Solved values are refreshed even when the solver rejects a constraint,
    /// so frames always reflect what is active.
    pub fn activate(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), EngineError> {
        let result = self.add_constraints(constraints);
        self.refresh();
        result
    }

    fn add_constraints(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), EngineError> {
        for constraint in constraints {
            tracing::debug!(%constraint, "activating");
            let desc = constraint.to_string();
            self.solver
                .add_constraint(constraint.raw().clone())
                .map_err(|e| convert_kasuari_error(e, desc))?;
            self.active.push(constraint);
        }
        Ok(())
    }

    /// Flatten nested groups and activate them together.
    ///
    /// Constraints are added in flatten order. If the solver rejects one, the
    /// ones before it stay active and the error names the rejected one.
    pub fn activate_all<I, G>(&mut self, groups: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = Constraint>,
    {
        self.activate(flatten(groups))
    }

    /// Run `build` once against a fresh batch, then activate what it collected
    pub fn activate_with<F>(&mut self, build: F) -> Result<(), EngineError>
    where
        F: FnOnce(&mut ConstraintBatch),
    {
        let mut batch = ConstraintBatch::new();
        build(&mut batch);
        tracing::debug!(groups = batch.groups(), constraints = batch.len(), "activating batch");
        self.activate(batch.finish())
    }

    /// Remove constraints previously activated by this engine
    pub fn deactivate_all(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), EngineError> {
        let result = self.remove_constraints(constraints);
        self.refresh();
        self.prune();
        result
    }

    fn remove_constraints(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), EngineError> {
        for constraint in constraints {
            let index = self
                .active
                .iter()
                .position(|c| c.raw() == constraint.raw())
                .ok_or_else(|| EngineError::NotActive {
                    constraint: constraint.to_string(),
                })?;
            tracing::debug!(%constraint, "deactivating");
            self.solver
                .remove_constraint(constraint.raw())
                .map_err(|e| EngineError::Internal(format!("{}: {:?}", constraint, e)))?;
            self.active.remove(index);
        }
        Ok(())
    }

    /// Pin a view's frame through edit variables at the configured frame
    /// priority. Calling again moves the frame.
    pub fn set_frame(&mut self, view: &View, frame: Rect) -> Result<(), EngineError> {
        let strength = self.config.frame_priority.below_required().strength();
        for (var, value) in [
            (view.x(), frame.x),
            (view.y(), frame.y),
            (view.width(), frame.width),
            (view.height(), frame.height),
        ] {
            if self.edits.insert(var) {
                self.solver.add_edit_variable(var, strength).map_err(|e| {
                    EngineError::Internal(format!(
                        "failed to add edit variable for {}: {}",
                        view, e
                    ))
                })?;
            }
            self.solver.suggest_value(var, value).map_err(|e| {
                EngineError::Internal(format!("failed to suggest value for {}: {}", view, e))
            })?;
        }
        tracing::debug!(view = view.name(), %frame, "frame suggested");
        self.refresh();
        Ok(())
    }

    /// Solved frame of a view. Variables the solver never saw read as zero.
    pub fn frame(&self, view: &View) -> Rect {
        let value = |var: Variable| self.values.get(&var).copied().unwrap_or(0.0);
        Rect::new(
            value(view.x()),
            value(view.y()),
            value(view.width()),
            value(view.height()),
        )
    }

    fn refresh(&mut self) {
        for &(var, value) in self.solver.fetch_changes() {
            self.values.insert(var, value);
        }
    }

    /// Drop cached values of variables no active constraint or edit mentions.
    /// The solver forgets such variables and reports them from zero if they
    /// come back.
    fn prune(&mut self) {
        let live: HashSet<Variable> = self
            .active
            .iter()
            .flat_map(|c| c.raw().expr().terms.iter().map(|term| term.variable))
            .chain(self.edits.iter().copied())
            .collect();
        let before = self.values.len();
        self.values.retain(|var, _| live.contains(var));
        tracing::trace!(pruned = before - self.values.len(), "pruned solved values");
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a kasuari error to an EngineError naming the constraint
fn convert_kasuari_error(e: AddConstraintError, constraint: String) -> EngineError {
    match e {
        AddConstraintError::UnsatisfiableConstraint => {
            EngineError::unsatisfiable(constraint, "conflicts with active required constraints")
        }
        AddConstraintError::DuplicateConstraint => EngineError::Duplicate { constraint },
        AddConstraintError::InternalSolverError(msg) => {
            EngineError::Internal(format!("{}: {}", constraint, msg))
        }
    }
}
