use tracing::debug;

use crate::error::{Result, SectionError};
use crate::profile::{reverse_boundary, ProfilePoint, SweepDirection};

use super::{require_fillet_fits, require_non_negative, require_positive};

/// Dimension set for a rectangular/square hollow section.
///
/// Two boundaries: the outer face of the tube and the inner face offset by
/// the wall thickness, each with its own corner radius. No sloped faces;
/// every corner fillet is a quarter circle. The inner boundary is wound
/// opposite to the outer so the enclosed region is the material ring
/// under both even-odd and nonzero fill rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RhsSection {
    /// Overall depth `H`.
    pub depth: f64,
    /// Overall width `B`.
    pub width: f64,
    /// Wall thickness `Tw`.
    pub wall_thickness: f64,
    /// Corner radius of the outer boundary.
    pub outer_radius: f64,
    /// Corner radius of the inner boundary.
    pub inner_radius: f64,
}

impl RhsSection {
    /// Creates a square-cornered hollow section.
    #[must_use]
    pub fn new(depth: f64, width: f64, wall_thickness: f64) -> Self {
        Self {
            depth,
            width,
            wall_thickness,
            outer_radius: 0.0,
            inner_radius: 0.0,
        }
    }

    /// Creates a hollow section with the rolled-tube convention of twice
    /// the wall thickness for both corner radii.
    #[must_use]
    pub fn with_standard_corners(depth: f64, width: f64, wall_thickness: f64) -> Self {
        Self {
            depth,
            width,
            wall_thickness,
            outer_radius: 2.0 * wall_thickness,
            inner_radius: 2.0 * wall_thickness,
        }
    }

    /// Checks the dimensions for geometric consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] for non-positive primary lengths,
    /// negative radii, a wall that consumes the interior, or corner radii
    /// that do not fit their half-faces.
    pub fn validate(&self) -> Result<()> {
        require_positive("depth", self.depth)?;
        require_positive("width", self.width)?;
        require_positive("wall_thickness", self.wall_thickness)?;
        require_non_negative("outer_radius", self.outer_radius)?;
        require_non_negative("inner_radius", self.inner_radius)?;

        let extent = self.depth.min(self.width);
        if 2.0 * self.wall_thickness >= extent {
            return Err(SectionError::WallTooThick {
                thickness: self.wall_thickness,
                extent,
            });
        }

        require_fillet_fits("outer_radius", self.outer_radius, extent / 2.0)?;
        let inner_extent = extent - 2.0 * self.wall_thickness;
        require_fillet_fits("inner_radius", self.inner_radius, inner_extent / 2.0)?;
        Ok(())
    }

    /// Generates the outer and inner boundaries.
    ///
    /// The outer boundary walks counter-clockwise, the inner clockwise.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    pub fn generate(&self) -> Result<Vec<Vec<ProfilePoint>>> {
        self.validate()?;

        let outer = corner_rounded_boundary(0.0, 0.0, self.depth, self.width, self.outer_radius);
        let inner = corner_rounded_boundary(
            self.wall_thickness,
            self.wall_thickness,
            self.depth - 2.0 * self.wall_thickness,
            self.width - 2.0 * self.wall_thickness,
            self.inner_radius,
        );

        debug!(
            outer_points = outer.len(),
            inner_points = inner.len(),
            "generated box boundaries"
        );
        Ok(vec![outer, reverse_boundary(&inner)])
    }
}

/// Closed rectangle boundary with rounded corners, walked
/// counter-clockwise from the bottom edge.
///
/// A zero radius yields the four sharp corners; the arc vertices are
/// omitted entirely rather than emitted as zero-length arcs.
fn corner_rounded_boundary(
    x_offset: f64,
    y_offset: f64,
    height: f64,
    width: f64,
    radius: f64,
) -> Vec<ProfilePoint> {
    if radius <= 0.0 {
        return vec![
            ProfilePoint::line(x_offset, y_offset),
            ProfilePoint::line(x_offset + width, y_offset),
            ProfilePoint::line(x_offset + width, y_offset + height),
            ProfilePoint::line(x_offset, y_offset + height),
            ProfilePoint::line(x_offset, y_offset),
        ];
    }

    vec![
        ProfilePoint::line(x_offset + radius, y_offset),
        ProfilePoint::line(x_offset + width - radius, y_offset),
        // Corner, bottom right.
        ProfilePoint::arc(
            x_offset + width,
            y_offset + radius,
            radius,
            SweepDirection::CounterClockwise,
        ),
        ProfilePoint::line(x_offset + width, y_offset + height - radius),
        // Corner, top right.
        ProfilePoint::arc(
            x_offset + width - radius,
            y_offset + height,
            radius,
            SweepDirection::CounterClockwise,
        ),
        ProfilePoint::line(x_offset + radius, y_offset + height),
        // Corner, top left.
        ProfilePoint::arc(
            x_offset,
            y_offset + height - radius,
            radius,
            SweepDirection::CounterClockwise,
        ),
        ProfilePoint::line(x_offset, y_offset + radius),
        // Corner, bottom left, closing onto the start point.
        ProfilePoint::arc(
            x_offset + radius,
            y_offset,
            radius,
            SweepDirection::CounterClockwise,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::profile::{ContourBuilder, SegmentKind};

    const TOL: f64 = 1e-9;

    #[test]
    fn sharp_corners_reduce_to_rectangles() {
        let section = RhsSection::new(100.0, 60.0, 5.0);
        let boundaries = section.generate().unwrap();
        assert_eq!(boundaries.len(), 2);

        let outer = &boundaries[0];
        assert_eq!(outer.len(), 5);
        assert!(outer.iter().all(|p| p.kind == SegmentKind::Line));
        assert!((outer[1].x - 60.0).abs() < TOL);
        assert!((outer[2].y - 100.0).abs() < TOL);

        // Inner rectangle is (B - 2t) x (H - 2t), reversed.
        let inner = &boundaries[1];
        assert_eq!(inner.len(), 5);
        assert!((inner[0].x - 5.0).abs() < TOL && (inner[0].y - 5.0).abs() < TOL);
        assert!(inner
            .iter()
            .all(|p| p.x >= 5.0 - TOL && p.x <= 55.0 + TOL && p.y >= 5.0 - TOL && p.y <= 95.0 + TOL));
    }

    #[test]
    fn rounded_corners_emit_eight_tangent_points() {
        let section = RhsSection::with_standard_corners(100.0, 60.0, 5.0);
        let boundaries = section.generate().unwrap();
        let outer = &boundaries[0];
        assert_eq!(outer.len(), 9);
        let arcs = outer
            .iter()
            .filter(|p| matches!(p.kind, SegmentKind::Arc { .. }))
            .count();
        assert_eq!(arcs, 4);

        // First corner arc runs from (B - r, 0) to (B, r).
        assert!((outer[1].x - 50.0).abs() < TOL && outer[1].y.abs() < TOL);
        assert!((outer[2].x - 60.0).abs() < TOL && (outer[2].y - 10.0).abs() < TOL);
    }

    #[test]
    fn boundaries_wind_in_opposite_directions() {
        let section = RhsSection::with_standard_corners(100.0, 60.0, 5.0);
        let contours = ContourBuilder::new(&section.generate().unwrap()).build();
        assert_eq!(contours.len(), 2);
        assert!(contours[0].signed_area(0.01) > 0.0);
        assert!(contours[1].signed_area(0.01) < 0.0);
    }

    #[test]
    fn ring_area_matches_the_wall() {
        // With sharp corners the two signed areas must sum to the exact
        // material area of the ring.
        let section = RhsSection::new(100.0, 60.0, 5.0);
        let contours = ContourBuilder::new(&section.generate().unwrap()).build();
        let material: f64 = contours.iter().map(|c| c.signed_area(0.01)).sum();
        let expected = 100.0 * 60.0 - 90.0 * 50.0;
        assert!((material - expected).abs() < 1e-6, "material={material}");
    }

    #[test]
    fn closure_of_both_boundaries() {
        let section = RhsSection::with_standard_corners(80.0, 80.0, 4.0);
        for boundary in &section.generate().unwrap() {
            let first = &boundary[0];
            let last = &boundary[boundary.len() - 1];
            assert!((first.x - last.x).abs() < TOL);
            assert!((first.y - last.y).abs() < TOL);
        }
    }

    #[test]
    fn rejects_wall_consuming_the_interior() {
        let section = RhsSection::new(100.0, 60.0, 30.0);
        assert!(matches!(
            section.generate(),
            Err(SectionError::WallTooThick { .. })
        ));
    }

    #[test]
    fn rejects_oversized_corner_radius() {
        let mut section = RhsSection::new(100.0, 60.0, 5.0);
        section.outer_radius = 40.0;
        assert!(matches!(
            section.generate(),
            Err(SectionError::FilletTooLarge { name: "outer_radius", .. })
        ));
    }
}
