use crate::scenario::{GroupAnchor, PivotCorner, Vec2};

use super::path::finite_or;

/// Axis-aligned bounding box over a set of member positions. Non-finite
/// input coordinates are treated as 0 before the box is computed, so one
/// corrupt member never produces a non-finite anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn of(points: &[Vec2]) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for point in points {
            let x = finite_or(point.x, 0.0);
            let y = finite_or(point.y, 0.0);
            bounds = Some(match bounds {
                None => Bounds {
                    min: Vec2::new(x, y),
                    max: Vec2::new(x, y),
                },
                Some(current) => Bounds {
                    min: Vec2::new(current.min.x.min(x), current.min.y.min(y)),
                    max: Vec2::new(current.max.x.max(x), current.max.y.max(y)),
                },
            });
        }
        bounds
    }

    pub fn mid(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }
}

/// Maps one of the nine relative anchor codes to a point of the bounding
/// box of `points`. "Top" is minimum y on the ground plan. An empty point
/// set resolves to the origin.
pub fn resolve_anchor(points: &[Vec2], anchor: GroupAnchor) -> Vec2 {
    let Some(bounds) = Bounds::of(points) else {
        return Vec2::ZERO;
    };
    let mid = bounds.mid();
    match anchor {
        GroupAnchor::TopLeft => Vec2::new(bounds.min.x, bounds.min.y),
        GroupAnchor::TopMid => Vec2::new(mid.x, bounds.min.y),
        GroupAnchor::TopRight => Vec2::new(bounds.max.x, bounds.min.y),
        GroupAnchor::CenterLeft => Vec2::new(bounds.min.x, mid.y),
        GroupAnchor::Center => mid,
        GroupAnchor::CenterRight => Vec2::new(bounds.max.x, mid.y),
        GroupAnchor::BottomLeft => Vec2::new(bounds.min.x, bounds.max.y),
        GroupAnchor::BottomMid => Vec2::new(mid.x, bounds.max.y),
        GroupAnchor::BottomRight => Vec2::new(bounds.max.x, bounds.max.y),
    }
}

/// The wheel pivot: one of the four bounding-box corners or its center.
pub fn resolve_pivot(points: &[Vec2], corner: PivotCorner) -> Vec2 {
    let Some(bounds) = Bounds::of(points) else {
        return Vec2::ZERO;
    };
    match corner {
        PivotCorner::TopLeft => Vec2::new(bounds.min.x, bounds.min.y),
        PivotCorner::TopRight => Vec2::new(bounds.max.x, bounds.min.y),
        PivotCorner::BottomLeft => Vec2::new(bounds.min.x, bounds.max.y),
        PivotCorner::BottomRight => Vec2::new(bounds.max.x, bounds.max.y),
        PivotCorner::Center => bounds.mid(),
    }
}
