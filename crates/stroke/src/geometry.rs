//! Flattening primitives into polylines and splitting them into dashes.

use crate::coords::{CanvasPoint, CanvasRect};
use crate::stroke::Primitive;
use std::f32::consts::TAU;

/// Number of straight segments used to approximate an ellipse.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// An open chain of points. Closed outlines repeat their first point at the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<CanvasPoint>,
}

impl Polyline {
    pub fn new(points: Vec<CanvasPoint>) -> Self {
        Self { points }
    }

    /// Total length along the chain.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    pub fn first(&self) -> Option<CanvasPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<CanvasPoint> {
        self.points.last().copied()
    }
}

/// Flatten a primitive into a single polyline.
pub fn outline(primitive: &Primitive) -> Polyline {
    match primitive {
        Primitive::Segment { from, to } => Polyline::new(vec![*from, *to]),
        Primitive::Rect(rect) => rect_outline(rect),
        Primitive::Ellipse(rect) => ellipse_outline(rect),
    }
}

fn rect_outline(rect: &CanvasRect) -> Polyline {
    let min = rect.origin;
    let max = rect.max();
    Polyline::new(vec![
        min,
        CanvasPoint::new(max.x(), min.y()),
        max,
        CanvasPoint::new(min.x(), max.y()),
        min,
    ])
}

fn ellipse_outline(rect: &CanvasRect) -> Polyline {
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    let mut points: Vec<CanvasPoint> = (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
            CanvasPoint::new(center.x() + rx * t.cos(), center.y() + ry * t.sin())
        })
        .collect();
    // Close exactly on the first point so the seam has no gap.
    points.push(points[0]);
    Polyline::new(points)
}

/// Push both ends of the chain outward by `amount` along their end segments,
/// giving the look of square caps on a butt-capped path.
pub fn extend_ends(polyline: &Polyline, amount: f32) -> Polyline {
    let mut points = polyline.points.clone();
    let (Some(&start), Some(&end)) = (points.first(), points.last()) else {
        return polyline.clone();
    };

    if let Some(next) = points.iter().copied().find(|p| *p != start) {
        let outward = start - next;
        points[0] = start + outward.scale(amount / outward.length());
    }
    if let Some(prev) = points.iter().rev().copied().find(|p| *p != end) {
        let outward = end - prev;
        let last = points.len() - 1;
        points[last] = end + outward.scale(amount / outward.length());
    }
    Polyline::new(points)
}

/// Split a polyline into dashes of `dash` length separated by gaps of the
/// same length. The pattern starts "on" at the first point and carries
/// across corners.
pub fn dash(polyline: &Polyline, dash: f32) -> Vec<Polyline> {
    let Some(first) = polyline.first() else {
        return Vec::new();
    };
    if dash <= 0.0 {
        return vec![polyline.clone()];
    }

    let mut dashes = Vec::new();
    let mut current = vec![first];
    let mut on = true;
    let mut left = dash;

    for pair in polyline.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let mut remaining = a.distance(b);
        if remaining == 0.0 {
            continue;
        }
        let direction = (b - a).scale(1.0 / remaining);
        let mut cursor = a;

        while remaining > left {
            let split = cursor + direction.scale(left);
            if on {
                current.push(split);
                dashes.push(Polyline::new(std::mem::take(&mut current)));
            } else {
                current = vec![split];
            }
            on = !on;
            remaining -= left;
            cursor = split;
            left = dash;
        }

        left -= remaining;
        if on {
            current.push(b);
        }
    }

    if on && current.len() > 1 {
        dashes.push(Polyline::new(current));
    }
    dashes
}
