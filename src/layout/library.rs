//! Ready-made rule sequences for common layouts
//!
//! Every function here is pure and returns a fresh [`Rules`]. Margins are
//! given as positive inward distances. Because the x axis grows to the right
//! and the y axis grows downward, right and bottom margins are stored as
//! negative offsets from the secondary view's right and bottom edges.

use super::anchor::{DimensionAnchor, XAnchor, YAnchor};
use super::rule::{Paired, Rules, Unpaired};
use super::types::EdgeInsets;

/// Same padding on all four edges
pub fn inset(padding: f64) -> Rules {
    inset_by(EdgeInsets::uniform(padding))
}

/// Top, left, right, bottom in that order
pub fn inset_by(insets: EdgeInsets) -> Rules {
    top(insets.top) + left(insets.left) + right(insets.right) + bottom(insets.bottom)
}

/// All four edges inside the secondary view's safe area
pub fn safe_inset(padding: f64) -> Rules {
    safe_top(padding) + safe_left(padding) + safe_right(padding) + safe_bottom(padding)
}

pub fn top(margin: f64) -> Rules {
    Paired::new(YAnchor::Top).offset(margin).into()
}

pub fn bottom(margin: f64) -> Rules {
    Paired::new(YAnchor::Bottom).offset(-margin).into()
}

pub fn left(margin: f64) -> Rules {
    Paired::new(XAnchor::Left).offset(margin).into()
}

pub fn right(margin: f64) -> Rules {
    Paired::new(XAnchor::Right).offset(-margin).into()
}

pub fn safe_top(margin: f64) -> Rules {
    Paired::new(YAnchor::Top)
        .to(YAnchor::SafeTop)
        .offset(margin)
        .into()
}

pub fn safe_bottom(margin: f64) -> Rules {
    Paired::new(YAnchor::Bottom)
        .to(YAnchor::SafeBottom)
        .offset(-margin)
        .into()
}

pub fn safe_left(margin: f64) -> Rules {
    Paired::new(XAnchor::Left)
        .to(XAnchor::SafeLeft)
        .offset(margin)
        .into()
}

pub fn safe_right(margin: f64) -> Rules {
    Paired::new(XAnchor::Right)
        .to(XAnchor::SafeRight)
        .offset(-margin)
        .into()
}

pub fn centered() -> Rules {
    center_x(0.0) + center_y(0.0)
}

pub fn center_x(offset: f64) -> Rules {
    Paired::new(XAnchor::CenterX).offset(offset).into()
}

pub fn center_y(offset: f64) -> Rules {
    Paired::new(YAnchor::CenterY).offset(offset).into()
}

/// Primary sits left of the secondary: `primary.right == secondary.left - spacing`
pub fn to_left(spacing: f64) -> Rules {
    Paired::new(XAnchor::Right)
        .to(XAnchor::Left)
        .offset(-spacing)
        .into()
}

/// Primary sits right of the secondary: `primary.left == secondary.right + spacing`
pub fn to_right(spacing: f64) -> Rules {
    Paired::new(XAnchor::Left)
        .to(XAnchor::Right)
        .offset(spacing)
        .into()
}

/// Primary sits under the secondary: `primary.top == secondary.bottom + spacing`
pub fn below(spacing: f64) -> Rules {
    Paired::new(YAnchor::Top)
        .to(YAnchor::Bottom)
        .offset(spacing)
        .into()
}

/// Primary sits over the secondary: `primary.bottom == secondary.top - spacing`
pub fn above(spacing: f64) -> Rules {
    Paired::new(YAnchor::Bottom)
        .to(YAnchor::Top)
        .offset(-spacing)
        .into()
}

pub fn equally_sized() -> Rules {
    width(0.0, 1.0) + height(0.0, 1.0)
}

/// `primary.height == secondary.height * multiplier + constant`
pub fn height(constant: f64, multiplier: f64) -> Rules {
    Paired::new(DimensionAnchor::Height)
        .offset(constant)
        .scaled(multiplier)
        .into()
}

/// `primary.width == secondary.width * multiplier + constant`
pub fn width(constant: f64, multiplier: f64) -> Rules {
    Paired::new(DimensionAnchor::Width)
        .offset(constant)
        .scaled(multiplier)
        .into()
}

pub fn constant_height(constant: f64) -> Rules {
    Unpaired::new(DimensionAnchor::Height, constant).into()
}

pub fn constant_width(constant: f64) -> Rules {
    Unpaired::new(DimensionAnchor::Width, constant).into()
}

/// `primary.height == secondary.width * ratio`; use with
/// [`View::self_constrain`](super::View::self_constrain) for a view's own ratio
pub fn aspect_ratio(ratio: f64) -> Rules {
    Paired::new(DimensionAnchor::Height)
        .to(DimensionAnchor::Width)
        .scaled(ratio)
        .into()
}

pub fn top_left(top_margin: f64, left_margin: f64) -> Rules {
    top(top_margin) + left(left_margin)
}

pub fn top_right(top_margin: f64, right_margin: f64) -> Rules {
    top(top_margin) + right(right_margin)
}

pub fn bottom_left(bottom_margin: f64, left_margin: f64) -> Rules {
    bottom(bottom_margin) + left(left_margin)
}

pub fn bottom_right(bottom_margin: f64, right_margin: f64) -> Rules {
    bottom(bottom_margin) + right(right_margin)
}
