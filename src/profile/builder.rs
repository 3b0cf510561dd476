use crate::math::arc_2d::fillet_bulge;
use crate::math::TOLERANCE;

use super::contour::{Contour, ContourVertex};
use super::{ProfilePoint, SegmentKind, SweepDirection};

/// Assembles ordered boundary point sequences into closed [`Contour`]s.
///
/// Shape-agnostic: for each boundary the walk starts at the first point
/// and every subsequent point contributes a straight segment or a
/// circular arc according to its tag. The builder trusts the generator's
/// tagging and performs no geometric validation; an arc radius smaller
/// than half its chord clamps to a semicircle.
#[derive(Debug)]
pub struct ContourBuilder<'a> {
    boundaries: &'a [Vec<ProfilePoint>],
}

impl<'a> ContourBuilder<'a> {
    /// Creates a builder over one or more boundary sequences.
    #[must_use]
    pub fn new(boundaries: &'a [Vec<ProfilePoint>]) -> Self {
        Self { boundaries }
    }

    /// Builds one closed contour per boundary.
    ///
    /// A final point coinciding with the first (within [`TOLERANCE`]) is
    /// folded into the closing segment; otherwise the contour closes with
    /// an implicit straight segment back to the start.
    #[must_use]
    pub fn build(&self) -> Vec<Contour> {
        self.boundaries.iter().map(|b| build_contour(b)).collect()
    }
}

fn build_contour(points: &[ProfilePoint]) -> Contour {
    if points.is_empty() {
        return Contour {
            vertices: Vec::new(),
            closed: true,
        };
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    let explicitly_closed = points.len() > 1
        && (last.x - first.x).abs() < TOLERANCE
        && (last.y - first.y).abs() < TOLERANCE;

    // Drop a duplicated closing point; its tag still describes the
    // closing segment.
    let count = if explicitly_closed {
        points.len() - 1
    } else {
        points.len()
    };

    let mut vertices = Vec::with_capacity(count);
    for i in 0..count {
        let p = &points[i];
        let bulge = match points.get(i + 1) {
            Some(next) => segment_bulge(p, next),
            // Implicit straight closure back to the first point.
            None => 0.0,
        };
        vertices.push(ContourVertex::new(p.x, p.y, bulge));
    }

    Contour {
        vertices,
        closed: true,
    }
}

/// Bulge of the segment from `from` to `to`, taken from `to`'s tag.
fn segment_bulge(from: &ProfilePoint, to: &ProfilePoint) -> f64 {
    match to.kind {
        SegmentKind::Line => 0.0,
        SegmentKind::Arc { radius, sweep } => {
            let chord = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
            fillet_bulge(chord, radius, sweep == SweepDirection::CounterClockwise)
        }
    }
}
