//! Layout documents: views and named rules described in TOML
//!
//! A document names a root view with a fixed frame, then lists the views to
//! place and the library rules that place them. Building a document resolves
//! every rule, activates the result in a fresh engine, and hands back the
//! solved frames.
//!
//! ```toml
//! [root]
//! frame = { width = 320, height = 480 }
//! safe_area = { top = 44, bottom = 34 }
//!
//! [[views]]
//! name = "header"
//! rules = [{ rule = "safe-top" }, { rule = "left", margin = 0 }, { rule = "right", margin = 0 }]
//! self_rules = [{ rule = "constant-height", constant = 44 }]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{
    library, Arrange, Constraint, ConstraintBatch, EdgeInsets, EngineError, LayoutConfig,
    LayoutEngine, Priority, Rect, Relation, Rules, View,
};

/// Errors that can occur when loading or building a layout document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read layout document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse layout document TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown view '{name}'{}", format_suggestions(.suggestions))]
    UnknownView {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("view '{0}' is declared more than once")]
    DuplicateView(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// A named library rule with its parameters.
///
/// Margins and spacings left out fall back to the [`LayoutConfig`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum RuleSpec {
    Inset {
        padding: Option<f64>,
    },
    InsetBy {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        left: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        right: f64,
    },
    SafeInset {
        padding: Option<f64>,
    },
    Top {
        margin: Option<f64>,
    },
    Bottom {
        margin: Option<f64>,
    },
    Left {
        margin: Option<f64>,
    },
    Right {
        margin: Option<f64>,
    },
    SafeTop {
        margin: Option<f64>,
    },
    SafeBottom {
        margin: Option<f64>,
    },
    SafeLeft {
        margin: Option<f64>,
    },
    SafeRight {
        margin: Option<f64>,
    },
    Centered,
    CenterX {
        #[serde(default)]
        offset: f64,
    },
    CenterY {
        #[serde(default)]
        offset: f64,
    },
    ToLeft {
        spacing: Option<f64>,
    },
    ToRight {
        spacing: Option<f64>,
    },
    Below {
        spacing: Option<f64>,
    },
    Above {
        spacing: Option<f64>,
    },
    EquallySized,
    Height {
        #[serde(default)]
        constant: f64,
        #[serde(default = "unit_multiplier")]
        multiplier: f64,
    },
    Width {
        #[serde(default)]
        constant: f64,
        #[serde(default = "unit_multiplier")]
        multiplier: f64,
    },
    ConstantHeight {
        constant: f64,
    },
    ConstantWidth {
        constant: f64,
    },
    AspectRatio {
        ratio: f64,
    },
    TopLeft {
        margin: Option<f64>,
    },
    TopRight {
        margin: Option<f64>,
    },
    BottomLeft {
        margin: Option<f64>,
    },
    BottomRight {
        margin: Option<f64>,
    },
}

fn unit_multiplier() -> f64 {
    1.0
}

impl RuleSpec {
    /// Expand into library rules, filling in configured defaults
    pub fn to_rules(&self, config: &LayoutConfig) -> Rules {
        let margin = |m: &Option<f64>| m.unwrap_or(config.margin);
        let spacing = |s: &Option<f64>| s.unwrap_or(config.spacing);
        match self {
            RuleSpec::Inset { padding } => library::inset(margin(padding)),
            RuleSpec::InsetBy {
                top,
                left,
                bottom,
                right,
            } => library::inset_by(EdgeInsets::new(*top, *left, *bottom, *right)),
            RuleSpec::SafeInset { padding } => library::safe_inset(margin(padding)),
            RuleSpec::Top { margin: m } => library::top(margin(m)),
            RuleSpec::Bottom { margin: m } => library::bottom(margin(m)),
            RuleSpec::Left { margin: m } => library::left(margin(m)),
            RuleSpec::Right { margin: m } => library::right(margin(m)),
            RuleSpec::SafeTop { margin: m } => library::safe_top(margin(m)),
            RuleSpec::SafeBottom { margin: m } => library::safe_bottom(margin(m)),
            RuleSpec::SafeLeft { margin: m } => library::safe_left(margin(m)),
            RuleSpec::SafeRight { margin: m } => library::safe_right(margin(m)),
            RuleSpec::Centered => library::centered(),
            RuleSpec::CenterX { offset } => library::center_x(*offset),
            RuleSpec::CenterY { offset } => library::center_y(*offset),
            RuleSpec::ToLeft { spacing: s } => library::to_left(spacing(s)),
            RuleSpec::ToRight { spacing: s } => library::to_right(spacing(s)),
            RuleSpec::Below { spacing: s } => library::below(spacing(s)),
            RuleSpec::Above { spacing: s } => library::above(spacing(s)),
            RuleSpec::EquallySized => library::equally_sized(),
            RuleSpec::Height {
                constant,
                multiplier,
            } => library::height(*constant, *multiplier),
            RuleSpec::Width {
                constant,
                multiplier,
            } => library::width(*constant, *multiplier),
            RuleSpec::ConstantHeight { constant } => library::constant_height(*constant),
            RuleSpec::ConstantWidth { constant } => library::constant_width(*constant),
            RuleSpec::AspectRatio { ratio } => library::aspect_ratio(*ratio),
            RuleSpec::TopLeft { margin: m } => library::top_left(margin(m), margin(m)),
            RuleSpec::TopRight { margin: m } => library::top_right(margin(m), margin(m)),
            RuleSpec::BottomLeft { margin: m } => library::bottom_left(margin(m), margin(m)),
            RuleSpec::BottomRight { margin: m } => library::bottom_right(margin(m), margin(m)),
        }
    }
}

fn to_rules(specs: &[RuleSpec], config: &LayoutConfig) -> Rules {
    specs.iter().map(|spec| spec.to_rules(config)).collect()
}

/// The root view: the only view with a fixed frame
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RootSpec {
    pub name: String,
    pub frame: Rect,
    pub safe_area: EdgeInsets,
}

impl Default for RootSpec {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            frame: Rect::zero(),
            safe_area: EdgeInsets::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewSpec {
    pub name: String,
    /// Secondary view for `rules`; the root when absent
    pub relative_to: Option<String>,
    #[serde(default)]
    pub relation: Relation,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub safe_area: EdgeInsets,
    /// Resolved against `relative_to`
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    /// Resolved against the view itself
    #[serde(default)]
    pub self_rules: Vec<RuleSpec>,
}

/// A row or column over named views
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineSpec {
    pub views: Vec<String>,
    pub spacing: Option<f64>,
    #[serde(default)]
    pub cross_axis: Vec<RuleSpec>,
    #[serde(default)]
    pub main_axis: Vec<RuleSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EqualSpec {
    pub views: Vec<String>,
    pub rules: Vec<RuleSpec>,
}

/// A parsed layout document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutDocument {
    pub root: RootSpec,
    pub views: Vec<ViewSpec>,
    pub rows: Vec<LineSpec>,
    pub columns: Vec<LineSpec>,
    pub equal: Vec<EqualSpec>,
}

impl FromStr for LayoutDocument {
    type Err = DocumentError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl LayoutDocument {
    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Resolve every rule and solve the layout.
    ///
    /// Constraints are activated in document order: view rules, then rows,
    /// columns and equal groups.
    pub fn build(&self, config: &LayoutConfig) -> Result<Layout, DocumentError> {
        let root = View::new(self.root.name.as_str()).with_safe_area(self.root.safe_area);
        let mut views = vec![root.clone()];
        let mut names = HashSet::from([self.root.name.clone()]);
        for spec in &self.views {
            if !names.insert(spec.name.clone()) {
                return Err(DocumentError::DuplicateView(spec.name.clone()));
            }
            views.push(View::new(spec.name.as_str()).with_safe_area(spec.safe_area));
        }
        let by_name: HashMap<&str, &View> = views.iter().map(|v| (v.name(), v)).collect();
        let lookup = |name: &str| -> Result<View, DocumentError> {
            by_name
                .get(name)
                .map(|v| (*v).clone())
                .ok_or_else(|| DocumentError::UnknownView {
                    name: name.to_string(),
                    suggestions: find_similar(&names, name, 2),
                })
        };
        let lookup_all = |names: &[String]| -> Result<Vec<View>, DocumentError> {
            names.iter().map(|name| lookup(name)).collect()
        };

        let mut batch = ConstraintBatch::new();
        for (spec, view) in self.views.iter().zip(&views[1..]) {
            let target = match &spec.relative_to {
                Some(name) => lookup(name)?,
                None => root.clone(),
            };
            batch.push(view.position_relative_to_with(
                &target,
                &to_rules(&spec.rules, config),
                spec.relation,
                spec.priority,
            ));
            batch.push(view.self_constrain_with(
                &to_rules(&spec.self_rules, config),
                spec.relation,
                spec.priority,
            ));
        }
        for row in &self.rows {
            batch.push_all(lookup_all(&row.views)?.row(
                &to_rules(&row.cross_axis, config),
                row.spacing.unwrap_or(config.spacing),
                &to_rules(&row.main_axis, config),
            ));
        }
        for column in &self.columns {
            batch.push_all(lookup_all(&column.views)?.column(
                &to_rules(&column.cross_axis, config),
                column.spacing.unwrap_or(config.spacing),
                &to_rules(&column.main_axis, config),
            ));
        }
        for equal in &self.equal {
            batch.push_all(lookup_all(&equal.views)?.equal_in(&to_rules(&equal.rules, config)));
        }

        let mut engine = LayoutEngine::with_config(config.clone());
        engine.set_frame(&root, self.root.frame)?;
        engine.activate(batch.finish())?;
        tracing::info!(
            views = views.len(),
            constraints = engine.active().len(),
            "layout solved"
        );
        Ok(Layout { engine, views })
    }
}

/// A solved document
pub struct Layout {
    engine: LayoutEngine,
    views: Vec<View>,
}

impl Layout {
    /// Root first, then views in declaration order
    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    pub fn frame(&self, name: &str) -> Option<Rect> {
        self.view(name).map(|v| self.engine.frame(v))
    }

    /// Every view with its solved frame, root first
    pub fn frames(&self) -> Vec<(&str, Rect)> {
        self.views
            .iter()
            .map(|v| (v.name(), self.engine.frame(v)))
            .collect()
    }

    /// Activated constraints, in activation order
    pub fn constraints(&self) -> &[Constraint] {
        self.engine.active()
    }

    pub fn engine_mut(&mut self) -> &mut LayoutEngine {
        &mut self.engine
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=n).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[n]
}

/// Find declared names within a maximum edit distance, closest first
fn find_similar(defined: &HashSet<String>, target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(String, usize)> = defined
        .iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then(|| (name.clone(), dist))
        })
        .collect();

    candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    candidates
        .into_iter()
        .map(|(name, _)| name)
        .take(3)
        .collect()
}
