use tracing::debug;

use crate::error::{Result, SectionError};
use crate::math::triangle::{DualFaceFillet, FaceFillet, RightTriangle};
use crate::profile::{ProfilePoint, SweepDirection};

use super::{require_fillet_fits, require_non_negative, require_positive, require_slope};

/// One leg of an angle section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleLeg {
    /// Length of the leg.
    pub length: f64,
    /// Thickness of the leg, measured at the midpoint of the free face
    /// when the inner face is inclined.
    pub thickness: f64,
    /// Absolute slope of the inner face in degrees; 90 means a square
    /// inner face.
    pub slope: f64,
    /// Radius of the toe fillet at the free end of the leg.
    pub toe_radius: f64,
}

impl AngleLeg {
    /// Creates a square-faced leg with a sharp toe.
    #[must_use]
    pub fn new(length: f64, thickness: f64) -> Self {
        Self {
            length,
            thickness,
            slope: 90.0,
            toe_radius: 0.0,
        }
    }

    /// Signed slope offset of the inner face from square, in degrees.
    #[must_use]
    pub fn slope_offset(&self) -> f64 {
        self.slope - 90.0
    }

    /// Fillet helper for the toe of this leg.
    #[must_use]
    pub fn toe_fillet(&self) -> FaceFillet {
        FaceFillet::new(self.toe_radius, self.slope_offset())
    }
}

/// Dimension set for an unequal-leg L/angle section.
///
/// The long leg runs along the left (vertical) edge and the short leg
/// along the top (horizontal) edge, meeting at the top-left corner. Each
/// leg carries its own slope and toe radius; a single root fillet blends
/// the two inclined inner faces, which generally meet at a point that must
/// be solved from both slopes at once.
#[derive(Debug, Clone, PartialEq)]
pub struct LSection {
    pub long_leg: AngleLeg,
    pub short_leg: AngleLeg,
    /// Radius of the root fillet shared by both inner faces.
    pub root_radius: f64,
}

impl LSection {
    /// Creates an angle from two legs, with a sharp root.
    #[must_use]
    pub fn new(long_leg: AngleLeg, short_leg: AngleLeg) -> Self {
        Self {
            long_leg,
            short_leg,
            root_radius: 0.0,
        }
    }

    /// Creates an equal-leg angle with uniform thickness.
    #[must_use]
    pub fn equal_legs(length: f64, thickness: f64) -> Self {
        Self::new(AngleLeg::new(length, thickness), AngleLeg::new(length, thickness))
    }

    /// Fillet helper for the root blend between the two inner faces.
    #[must_use]
    pub fn root_fillet(&self) -> DualFaceFillet {
        DualFaceFillet::new(
            self.root_radius,
            self.long_leg.slope_offset(),
            self.short_leg.slope_offset(),
        )
    }

    /// Checks the dimensions for geometric consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] for non-positive leg dimensions,
    /// negative radii, legs too short to cross the other leg's thickness,
    /// toe radii beyond half the leg thickness, a root radius that does
    /// not fit the inner faces, or degenerate slopes.
    pub fn validate(&self) -> Result<()> {
        require_positive("long_leg.length", self.long_leg.length)?;
        require_positive("long_leg.thickness", self.long_leg.thickness)?;
        require_positive("short_leg.length", self.short_leg.length)?;
        require_positive("short_leg.thickness", self.short_leg.thickness)?;
        require_non_negative("root_radius", self.root_radius)?;
        require_non_negative("long_leg.toe_radius", self.long_leg.toe_radius)?;
        require_non_negative("short_leg.toe_radius", self.short_leg.toe_radius)?;
        require_slope(self.long_leg.slope)?;
        require_slope(self.short_leg.slope)?;

        if self.long_leg.length <= self.short_leg.thickness
            || self.short_leg.length <= self.long_leg.thickness
        {
            return Err(SectionError::Degenerate(format!(
                "legs {} x {} cannot cross thicknesses {} x {}",
                self.long_leg.length,
                self.short_leg.length,
                self.long_leg.thickness,
                self.short_leg.thickness
            )));
        }

        require_fillet_fits(
            "long_leg.toe_radius",
            self.long_leg.toe_radius,
            self.long_leg.thickness / 2.0,
        )?;
        require_fillet_fits(
            "short_leg.toe_radius",
            self.short_leg.toe_radius,
            self.short_leg.thickness / 2.0,
        )?;
        let inner_face = (self.long_leg.length - self.short_leg.thickness)
            .min(self.short_leg.length - self.long_leg.thickness);
        require_fillet_fits("root_radius", self.root_radius, inner_face / 2.0)?;
        Ok(())
    }

    /// Generates the boundary as a single closed point sequence, walked
    /// counter-clockwise from the outer corner of the two legs.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    #[allow(clippy::too_many_lines, clippy::similar_names)]
    pub fn generate(&self) -> Result<Vec<Vec<ProfilePoint>>> {
        self.validate()?;

        let long = &self.long_leg;
        let short = &self.short_leg;
        let tan_long = long.slope_offset().to_radians().tan();
        let tan_short = short.slope_offset().to_radians().tan();
        let cos_long = long.slope_offset().to_radians().cos();
        let cos_short = short.slope_offset().to_radians().cos();

        // Distance along each leg to the point where its thickness is
        // measured.
        let face_to_thickness_long = (long.length - short.thickness) / 2.0;
        let face_to_thickness_short = (short.length - long.thickness) / 2.0;

        // Intersection of the two inclined inner faces, first measured
        // from the crossing of the thickness lines, then shifted to the
        // outer corner of the legs.
        let mut along_long = (face_to_thickness_short - face_to_thickness_long * tan_long)
            * tan_short
            / (1.0 - tan_long * tan_short);
        let mut along_short = (face_to_thickness_long - along_long) * tan_long;
        along_long += short.thickness;
        along_short += long.thickness;

        // Root curve: chord between its tangent points, from the angle
        // the inclined faces enclose.
        let included_at_center = 90.0 - long.slope_offset() - short.slope_offset();
        let chord = 2.0 * self.root_radius * (included_at_center.to_radians() / 2.0).sin();
        let included_at_intersection = 90.0 + long.slope_offset() + short.slope_offset();
        let included_at_curve_points = (180.0 - included_at_intersection) / 2.0;
        let intersection_to_curve = chord / 2.0 / included_at_curve_points.to_radians().cos();

        // Inclined face lengths from the faces' intersection back to the
        // thickness measurement points.
        let side_long = (short.thickness + face_to_thickness_long - along_long) / cos_long;
        let side_short = (long.thickness + face_to_thickness_short - along_short) / cos_short;

        let to_curve_long = side_long - intersection_to_curve;
        let to_curve_short = side_short - intersection_to_curve;

        let long_toe_large = long.toe_fillet().large();
        let short_toe_large = short.toe_fillet().large();

        let to_thickness_from_toe_long =
            face_to_thickness_long - (long.toe_radius - long_toe_large.opposite());
        let to_thickness_from_toe_short =
            face_to_thickness_short - (short.toe_radius - short_toe_large.opposite());

        // Full inclined face per leg, toe tangent point to root tangent
        // point.
        let long_main = RightTriangle::new(
            to_curve_long + to_thickness_from_toe_long / cos_long,
            long.slope_offset(),
        );
        let short_main = RightTriangle::new(
            to_curve_short + to_thickness_from_toe_short / cos_short,
            short.slope_offset(),
        );

        let height_at_thickness_long =
            long_main.opposite() / long_main.adjacent() * to_thickness_from_toe_long;
        let height_at_thickness_short =
            short_main.opposite() / short_main.adjacent() * to_thickness_from_toe_short;

        // Remaining thickness at the toe once the slope rise and the toe
        // blend are taken out.
        let thickness_at_toe_long =
            long.thickness - height_at_thickness_long - long_toe_large.adjacent();
        let thickness_at_toe_short =
            short.thickness - height_at_thickness_short - short_toe_large.adjacent();

        let root = self.root_fillet();

        let mut points = vec![
            ProfilePoint::line(0.0, 0.0),
            ProfilePoint::line(thickness_at_toe_long, 0.0),
        ];

        // Toe of the long leg.
        if long.toe_radius > 0.0 {
            points.push(ProfilePoint::arc(
                thickness_at_toe_long + long_toe_large.adjacent(),
                long.toe_radius - long_toe_large.opposite(),
                long.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        // Inclined inner face of the long leg. The long leg stands
        // upright, so its triangle legs swap roles: opposite runs across,
        // adjacent runs up.
        {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::line(
                last.x + long_main.opposite(),
                last.y + long_main.adjacent(),
            ));
        }

        // Root blend between the two inner faces.
        if self.root_radius > 0.0 {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::arc(
                last.x + root.long_large().adjacent() - root.short_small().adjacent(),
                last.y - root.long_large().opposite() + root.short_large().adjacent(),
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        // Inclined inner face of the short leg.
        {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::line(
                last.x + short_main.adjacent(),
                last.y + short_main.opposite(),
            ));
        }

        // Toe of the short leg. Mirror of the long toe: the tangent point
        // on the end face sits r·(1 - sin) across and r·cos up from the
        // face tangent point.
        if short.toe_radius > 0.0 {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::arc(
                last.x + short.toe_radius - short_toe_large.opposite(),
                last.y + short_toe_large.adjacent(),
                short.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        // Free end of the short leg, then the two outer faces back to the
        // start.
        {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::line(last.x, last.y + thickness_at_toe_short));
        }
        {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::line(last.x - short.length, last.y));
        }
        {
            let last = points[points.len() - 1];
            points.push(ProfilePoint::line(last.x, last.y - long.length));
        }

        debug!(points = points.len(), "generated angle boundary");
        Ok(vec![points])
    }
}
