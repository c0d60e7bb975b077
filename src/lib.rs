//! Anchor Rules - declarative positioning rules over a Cassowary solver
//!
//! Views are positioned and sized by composable rule values ("inset by 16",
//! "below with spacing 8", "aspect ratio 1:2") instead of hand-written
//! constraint equations. Rules resolve into concrete constraints between two
//! views, and a [`LayoutEngine`] activates them in the kasuari solver.
//!
//! # Example
//!
//! ```rust
//! use anchor_rules::layout::{library, LayoutEngine, Rect, View};
//!
//! let root = View::new("root");
//! let child = View::new("child");
//!
//! let mut engine = LayoutEngine::new();
//! engine.set_frame(&root, Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();
//! engine
//!     .activate(child.position_relative_to(&root, &library::inset(10.0)))
//!     .unwrap();
//!
//! assert!(engine.frame(&child).approx_eq(&Rect::new(10.0, 10.0, 180.0, 80.0), 0.001));
//! ```

pub mod document;
pub mod layout;

pub use document::{DocumentError, Layout, LayoutDocument, RuleSpec};
pub use layout::{
    library, Arrange, Constraint, ConstraintBatch, EngineError, LayoutConfig, LayoutEngine,
    Priority, Rect, Relation, Rules, View,
};

use thiserror::Error;

/// Errors from loading and solving a layout document end to end
#[derive(Debug, Error)]
pub enum Error {
    /// Error in the document itself, or while solving it
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Error in the configuration file
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse and solve a layout document with default configuration
///
/// # Example
///
/// ```rust
/// use anchor_rules::solve;
///
/// let layout = solve(r#"
///     [root]
///     frame = { width = 100, height = 100 }
///
///     [[views]]
///     name = "badge"
///     rules = [{ rule = "centered" }]
///     self_rules = [
///         { rule = "constant-width", constant = 20 },
///         { rule = "aspect-ratio", ratio = 1.0 },
///     ]
/// "#).unwrap();
///
/// let frame = layout.frame("badge").unwrap();
/// assert!((frame.x - 40.0).abs() < 0.001);
/// assert!((frame.height - 20.0).abs() < 0.001);
/// ```
pub fn solve(source: &str) -> Result<Layout, Error> {
    solve_with_config(source, &LayoutConfig::default())
}

/// Parse and solve a layout document with custom configuration
pub fn solve_with_config(source: &str, config: &LayoutConfig) -> Result<Layout, Error> {
    let doc: LayoutDocument = source.parse()?;
    Ok(doc.build(config)?)
}

/// Load a [`LayoutConfig`] from a TOML file
pub fn load_config(path: &std::path::Path) -> Result<LayoutConfig, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(LayoutConfig::from_toml(&content)?)
}
