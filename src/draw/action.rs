//! Committed drawing actions.

/// A single committed drawing operation.
///
/// Actions are immutable once they enter the [`ActionLog`](super::ActionLog);
/// undo removes them and redo appends a fresh copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawingAction {
    /// Straight segment between two points
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Axis-aligned box given by two opposite corners.
    ///
    /// The corners are stored exactly as dragged, so `x2 < x1` or `y2 < y1`
    /// is legal; the renderer normalizes.
    Rectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Circle around `(cx, cy)` passing through `(edge_x, edge_y)`
    Circle {
        cx: i32,
        cy: i32,
        edge_x: i32,
        edge_y: i32,
    },
    /// Text anchored at `(x, y)`; the baseline sits a fixed offset below the anchor
    Text { x: i32, y: i32, text: String },
}

impl DrawingAction {
    /// Short human-readable name, used in logs and the status bar.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawingAction::Line { .. } => "line",
            DrawingAction::Rectangle { .. } => "rectangle",
            DrawingAction::Circle { .. } => "circle",
            DrawingAction::Text { .. } => "text",
        }
    }

    /// Radius of a circle action, `None` for every other kind.
    pub fn radius(&self) -> Option<f64> {
        match self {
            DrawingAction::Circle {
                cx,
                cy,
                edge_x,
                edge_y,
            } => Some(circle_radius(*cx, *cy, *edge_x, *edge_y)),
            _ => None,
        }
    }
}

/// Euclidean distance between the circle center and its edge point.
pub fn circle_radius(cx: i32, cy: i32, edge_x: i32, edge_y: i32) -> f64 {
    let dx = (edge_x - cx) as f64;
    let dy = (edge_y - cy) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Normalizes a corner-to-corner box into `(x, y, width, height)` with
/// non-negative extents.
pub fn normalize_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    (x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_radius_is_euclidean_distance() {
        let circle = DrawingAction::Circle {
            cx: 10,
            cy: 10,
            edge_x: 13,
            edge_y: 14,
        };
        assert_eq!(circle.radius(), Some(5.0));
    }

    #[test]
    fn radius_is_none_for_other_kinds() {
        let line = DrawingAction::Line {
            x1: 0,
            y1: 0,
            x2: 3,
            y2: 4,
        };
        assert_eq!(line.radius(), None);
    }

    #[test]
    fn normalize_rect_handles_reverse_drag() {
        assert_eq!(normalize_rect(50, 40, 10, 0), (10, 0, 40, 40));
        assert_eq!(normalize_rect(10, 0, 50, 40), (10, 0, 40, 40));
    }

    #[test]
    fn zero_size_rect_stays_zero() {
        assert_eq!(normalize_rect(7, 7, 7, 7), (7, 7, 0, 0));
    }
}
