//! The fixed catalog of anchors a view exposes
//!
//! Anchors come in three kinds: horizontal-line anchors (positions on the x
//! axis), vertical-line anchors (positions on the y axis) and dimensions.
//! Each kind is its own type so that a rule can only relate anchors of the
//! same kind, and only dimension rules can carry a multiplier.

use std::fmt;

use kasuari::Expression;

use super::view::View;

mod sealed {
    pub trait Sealed {}
}

/// An anchor kind that can be resolved against a view.
///
/// Implemented only by [`XAnchor`], [`YAnchor`] and [`DimensionAnchor`].
pub trait Anchor: sealed::Sealed + Copy + fmt::Debug + PartialEq + 'static {
    /// Linear expression for this anchor in terms of the view's variables
    fn expression(self, view: &View) -> Expression;

    /// Kind-erased form, used for diagnostics
    fn erase(self) -> AnchorRef;
}

/// Positions along the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XAnchor {
    Left,
    Right,
    CenterX,
    SafeLeft,
    SafeRight,
    SafeCenterX,
}

/// Positions along the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAnchor {
    Top,
    Bottom,
    CenterY,
    SafeTop,
    SafeBottom,
    SafeCenterY,
}

/// Sizes of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionAnchor {
    Width,
    Height,
    SafeWidth,
    SafeHeight,
}

impl XAnchor {
    pub const ALL: [XAnchor; 6] = [
        Self::Left,
        Self::Right,
        Self::CenterX,
        Self::SafeLeft,
        Self::SafeRight,
        Self::SafeCenterX,
    ];

    pub fn is_safe_area(self) -> bool {
        matches!(self, Self::SafeLeft | Self::SafeRight | Self::SafeCenterX)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::CenterX => "center_x",
            Self::SafeLeft => "safe_left",
            Self::SafeRight => "safe_right",
            Self::SafeCenterX => "safe_center_x",
        }
    }
}

impl YAnchor {
    pub const ALL: [YAnchor; 6] = [
        Self::Top,
        Self::Bottom,
        Self::CenterY,
        Self::SafeTop,
        Self::SafeBottom,
        Self::SafeCenterY,
    ];

    pub fn is_safe_area(self) -> bool {
        matches!(self, Self::SafeTop | Self::SafeBottom | Self::SafeCenterY)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterY => "center_y",
            Self::SafeTop => "safe_top",
            Self::SafeBottom => "safe_bottom",
            Self::SafeCenterY => "safe_center_y",
        }
    }
}

impl DimensionAnchor {
    pub const ALL: [DimensionAnchor; 4] =
        [Self::Width, Self::Height, Self::SafeWidth, Self::SafeHeight];

    pub fn is_safe_area(self) -> bool {
        matches!(self, Self::SafeWidth | Self::SafeHeight)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::SafeWidth => "safe_width",
            Self::SafeHeight => "safe_height",
        }
    }
}

impl sealed::Sealed for XAnchor {}
impl sealed::Sealed for YAnchor {}
impl sealed::Sealed for DimensionAnchor {}

impl Anchor for XAnchor {
    fn expression(self, view: &View) -> Expression {
        let insets = view.safe_area();
        match self {
            Self::Left => view.x().into(),
            // right = x + width
            Self::Right => view.x() + view.width() * 1.0,
            // center_x = x + width / 2
            Self::CenterX => view.x() + view.width() * 0.5,
            Self::SafeLeft => Expression::from(view.x()) + insets.left,
            Self::SafeRight => (view.x() + view.width() * 1.0) + -insets.right,
            Self::SafeCenterX => {
                (view.x() + view.width() * 0.5) + (insets.left - insets.right) * 0.5
            }
        }
    }

    fn erase(self) -> AnchorRef {
        AnchorRef::X(self)
    }
}

impl Anchor for YAnchor {
    fn expression(self, view: &View) -> Expression {
        let insets = view.safe_area();
        match self {
            Self::Top => view.y().into(),
            Self::Bottom => view.y() + view.height() * 1.0,
            Self::CenterY => view.y() + view.height() * 0.5,
            Self::SafeTop => Expression::from(view.y()) + insets.top,
            Self::SafeBottom => (view.y() + view.height() * 1.0) + -insets.bottom,
            Self::SafeCenterY => {
                (view.y() + view.height() * 0.5) + (insets.top - insets.bottom) * 0.5
            }
        }
    }

    fn erase(self) -> AnchorRef {
        AnchorRef::Y(self)
    }
}

impl Anchor for DimensionAnchor {
    fn expression(self, view: &View) -> Expression {
        let insets = view.safe_area();
        match self {
            Self::Width => view.width().into(),
            Self::Height => view.height().into(),
            Self::SafeWidth => Expression::from(view.width()) + -insets.horizontal(),
            Self::SafeHeight => Expression::from(view.height()) + -insets.vertical(),
        }
    }

    fn erase(self) -> AnchorRef {
        AnchorRef::Dimension(self)
    }
}

/// An anchor of any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorRef {
    X(XAnchor),
    Y(YAnchor),
    Dimension(DimensionAnchor),
}

impl AnchorRef {
    pub fn name(self) -> &'static str {
        match self {
            Self::X(a) => a.name(),
            Self::Y(a) => a.name(),
            Self::Dimension(a) => a.name(),
        }
    }

    pub fn is_dimension(self) -> bool {
        matches!(self, Self::Dimension(_))
    }

    pub fn is_safe_area(self) -> bool {
        match self {
            Self::X(a) => a.is_safe_area(),
            Self::Y(a) => a.is_safe_area(),
            Self::Dimension(a) => a.is_safe_area(),
        }
    }
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for XAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for YAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DimensionAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
