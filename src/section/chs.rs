use tracing::debug;

use crate::error::{Result, SectionError};
use crate::profile::{reverse_boundary, ProfilePoint, SweepDirection};

use super::require_positive;

/// Dimension set for a circular hollow section.
///
/// Both boundaries are regular polygons approximating their circle with
/// `segments` arc-tagged vertices about a shared centre at
/// `(OD/2, OD/2)`; callers wanting a smoother rendering raise the
/// segment count. The count is a required constructor argument rather
/// than a hidden default. The inner boundary is wound opposite to the
/// outer so the enclosed region is the material ring under both even-odd
/// and nonzero fill rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ChsSection {
    /// Outer diameter `OD`.
    pub outer_diameter: f64,
    /// Wall thickness `Tw`.
    pub wall_thickness: f64,
    /// Number of arc segments per circle.
    pub segments: u32,
}

impl ChsSection {
    /// Creates a circular hollow section with an explicit tessellation
    /// count.
    #[must_use]
    pub fn new(outer_diameter: f64, wall_thickness: f64, segments: u32) -> Self {
        Self {
            outer_diameter,
            wall_thickness,
            segments,
        }
    }

    /// Checks the dimensions for geometric consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] for non-positive diameter or wall
    /// thickness, a wall that consumes the interior, or fewer than 3
    /// segments.
    pub fn validate(&self) -> Result<()> {
        require_positive("outer_diameter", self.outer_diameter)?;
        require_positive("wall_thickness", self.wall_thickness)?;

        if 2.0 * self.wall_thickness >= self.outer_diameter {
            return Err(SectionError::WallTooThick {
                thickness: self.wall_thickness,
                extent: self.outer_diameter,
            });
        }
        if self.segments < 3 {
            return Err(SectionError::TooFewSegments {
                segments: self.segments,
            });
        }
        Ok(())
    }

    /// Generates the outer and inner boundaries, `segments + 1` points
    /// each with the first point repeated at the end.
    ///
    /// The outer boundary walks counter-clockwise, the inner clockwise.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    pub fn generate(&self) -> Result<Vec<Vec<ProfilePoint>>> {
        self.validate()?;

        let outer_radius = self.outer_diameter / 2.0;
        let inner_radius = outer_radius - self.wall_thickness;

        // Outer circle about (OD/2, OD/2); the inner circle shares the
        // centre once shifted by the wall thickness in its own frame.
        let outer = circle_boundary(outer_radius, 0.0, 0.0, self.segments);
        let inner = circle_boundary(
            inner_radius,
            self.wall_thickness,
            self.wall_thickness,
            self.segments,
        );

        debug!(
            segments = self.segments,
            outer_radius, inner_radius, "generated circular boundaries"
        );
        Ok(vec![outer, reverse_boundary(&inner)])
    }
}

/// Closed circle approximation: `segments + 1` arc-tagged points stepped
/// in equal angles counter-clockwise from angle zero, the centre at
/// `(radius + x_shift, radius + y_shift)`.
fn circle_boundary(radius: f64, x_shift: f64, y_shift: f64, segments: u32) -> Vec<ProfilePoint> {
    let step = 360.0 / f64::from(segments);
    #[allow(clippy::cast_possible_truncation)]
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let angle = (f64::from(i) * step).to_radians();
        points.push(ProfilePoint::arc(
            radius + x_shift + radius * angle.cos(),
            radius + y_shift + radius * angle.sin(),
            radius,
            SweepDirection::CounterClockwise,
        ));
    }
    points
}
