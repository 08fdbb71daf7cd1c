//! Geometry value types
//!
//! Logical-pixel quantities used by token bundles and resolved component styles.

use std::ops::Add;

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Insets on each edge of a rectangle (padding, window insets)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn top(value: f32) -> Self {
        Self::new(value, 0.0, 0.0, 0.0)
    }

    pub const fn bottom(value: f32) -> Self {
        Self::new(0.0, 0.0, value, 0.0)
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(self, rhs: EdgeInsets) -> EdgeInsets {
        EdgeInsets {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius::uniform(0.0);

    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Copy with the corners on the leading edge squared off
    pub fn with_start_zeroed(self, direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => Self {
                top_left: 0.0,
                bottom_left: 0.0,
                ..self
            },
            LayoutDirection::Rtl => Self {
                top_right: 0.0,
                bottom_right: 0.0,
                ..self
            },
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// Reading direction of the host layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_insets_add_per_edge() {
        let status_bar = EdgeInsets::top(24.0);
        let navigation_bar = EdgeInsets::bottom(48.0);
        let sum = status_bar + navigation_bar + EdgeInsets::uniform(8.0);

        assert_eq!(sum, EdgeInsets::new(32.0, 8.0, 56.0, 8.0));
        assert_eq!(sum.vertical(), 88.0);
        assert_eq!(sum.horizontal(), 16.0);
    }

    #[test]
    fn test_start_corners_follow_layout_direction() {
        let radius = CornerRadius::uniform(32.0);

        let ltr = radius.with_start_zeroed(LayoutDirection::Ltr);
        assert_eq!(ltr.to_array(), [0.0, 32.0, 32.0, 0.0]);

        let rtl = radius.with_start_zeroed(LayoutDirection::Rtl);
        assert_eq!(rtl.to_array(), [32.0, 0.0, 0.0, 32.0]);
    }
}
