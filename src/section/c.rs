use tracing::debug;

use crate::error::{Result, SectionError};
use crate::math::triangle::{FaceFillet, RightTriangle};
use crate::profile::{ProfilePoint, SweepDirection};

use super::{require_fillet_fits, require_non_negative, require_positive, require_slope};

/// Dimension set for a hot-rolled C/channel section.
///
/// Same flange, toe and root geometry as the I/H family, but the web sits
/// on the left edge, the flanges point one way only, and the flange
/// thickness is measured at `(B - Tw)/2`, the midpoint of the single
/// outstand. One closed boundary, asymmetric about the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CSection {
    /// Overall depth `H`.
    pub depth: f64,
    /// Flange width `B`.
    pub flange_width: f64,
    /// Web thickness `Tw`.
    pub web_thickness: f64,
    /// Flange thickness `Tf`, measured at `(B - Tw)/2` from the tip.
    pub flange_thickness: f64,
    /// Fillet radius at the flange-to-web junctions.
    pub root_radius: f64,
    /// Fillet radius at the flange tips.
    pub toe_radius: f64,
    /// Absolute slope of the inner flange faces in degrees; 90 means
    /// square flanges.
    pub flange_slope: f64,
}

impl CSection {
    /// Creates a sharp-cornered, square-flanged channel; set the radii
    /// and slope fields for the filleted form.
    #[must_use]
    pub fn new(depth: f64, flange_width: f64, web_thickness: f64, flange_thickness: f64) -> Self {
        Self {
            depth,
            flange_width,
            web_thickness,
            flange_thickness,
            root_radius: 0.0,
            toe_radius: 0.0,
            flange_slope: 90.0,
        }
    }

    /// Signed slope offset from a square flange face, in degrees.
    #[must_use]
    pub fn slope_offset(&self) -> f64 {
        self.flange_slope - 90.0
    }

    /// Fillet helper for the flange tips.
    #[must_use]
    pub fn toe_fillet(&self) -> FaceFillet {
        FaceFillet::new(self.toe_radius, self.slope_offset())
    }

    /// Fillet helper for the flange-to-web junctions.
    #[must_use]
    pub fn root_fillet(&self) -> FaceFillet {
        FaceFillet::new(self.root_radius, self.slope_offset())
    }

    /// Checks the dimensions for geometric consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] for non-positive primary lengths,
    /// negative radii, fillets that do not fit the outstand or the web
    /// face, a toe radius beyond half the flange thickness, or a
    /// degenerate flange slope.
    pub fn validate(&self) -> Result<()> {
        require_positive("depth", self.depth)?;
        require_positive("flange_width", self.flange_width)?;
        require_positive("web_thickness", self.web_thickness)?;
        require_positive("flange_thickness", self.flange_thickness)?;
        require_non_negative("root_radius", self.root_radius)?;
        require_non_negative("toe_radius", self.toe_radius)?;
        require_slope(self.flange_slope)?;

        if self.web_thickness >= self.flange_width {
            return Err(SectionError::Degenerate(format!(
                "web thickness {} leaves no flange outstand on a {} wide flange",
                self.web_thickness, self.flange_width
            )));
        }
        if 2.0 * self.flange_thickness >= self.depth {
            return Err(SectionError::Degenerate(format!(
                "flange thickness {} leaves no web in a depth of {}",
                self.flange_thickness, self.depth
            )));
        }

        require_fillet_fits("toe_radius", self.toe_radius, self.flange_thickness / 2.0)?;
        let outstand = self.flange_width - self.web_thickness;
        require_fillet_fits(
            "root_radius",
            self.root_radius,
            outstand - self.toe_radius,
        )?;
        require_fillet_fits(
            "root_radius",
            self.root_radius,
            (self.depth - 2.0 * self.flange_thickness) / 2.0,
        )?;
        Ok(())
    }

    /// Generates the boundary as a single closed point sequence, walked
    /// counter-clockwise from the bottom-left corner.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    #[allow(clippy::too_many_lines)]
    pub fn generate(&self) -> Result<Vec<Vec<ProfilePoint>>> {
        self.validate()?;

        let slope = self.slope_offset();
        let toe_large = self.toe_fillet().large();
        let root_large = self.root_fillet().large();

        // Inclined flange face spans the full outstand between the two
        // fillet tangent points.
        let main_horizontal = self.flange_width
            - self.web_thickness
            - (self.root_radius - root_large.opposite())
            - (self.toe_radius - toe_large.opposite());
        let main_hypotenuse = main_horizontal / slope.to_radians().cos();
        let flange_tri = RightTriangle::new(main_hypotenuse, 90.0 - slope);

        let apex_to_thickness = ((self.flange_width - self.web_thickness) / 2.0)
            - (self.toe_radius - toe_large.opposite());
        let height_at_thickness =
            flange_tri.adjacent() * apex_to_thickness / flange_tri.opposite();

        // Distance from the nearest flange face to where the root fillet
        // meets the web.
        let height_at_root = self.flange_thickness - height_at_thickness
            + flange_tri.adjacent()
            + root_large.adjacent();

        let h = self.depth;
        let b = self.flange_width;
        let tw = self.web_thickness;
        let tf = self.flange_thickness;

        let mut points = vec![ProfilePoint::line(0.0, 0.0), ProfilePoint::line(b, 0.0)];

        points.push(ProfilePoint::line(
            b,
            tf - height_at_thickness - toe_large.adjacent(),
        ));

        // Toe, bottom flange tip.
        if self.toe_radius > 0.0 {
            points.push(ProfilePoint::arc(
                b - (self.toe_radius - toe_large.opposite()),
                tf - height_at_thickness,
                self.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        points.push(ProfilePoint::line(
            b - (self.toe_radius - toe_large.opposite()) - flange_tri.opposite(),
            tf - height_at_thickness + flange_tri.adjacent(),
        ));

        // Root, bottom flange to web.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                tw,
                height_at_root,
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line(tw, h - height_at_root));

        // Root, top flange to web.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                tw + (self.root_radius - root_large.opposite()),
                h - height_at_root + root_large.adjacent(),
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line(
            b - (self.toe_radius - toe_large.opposite()),
            h - height_at_root + root_large.adjacent() + flange_tri.adjacent(),
        ));

        // Toe, top flange tip.
        if self.toe_radius > 0.0 {
            points.push(ProfilePoint::arc(
                b,
                h - height_at_root
                    + root_large.adjacent()
                    + flange_tri.adjacent()
                    + toe_large.adjacent(),
                self.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        points.push(ProfilePoint::line(b, h));
        points.push(ProfilePoint::line(0.0, h));
        points.push(ProfilePoint::line(
            0.0,
            h - tf + height_at_thickness + toe_large.adjacent(),
        ));

        points.push(ProfilePoint::line(0.0, 0.0));

        debug!(points = points.len(), "generated channel boundary");
        Ok(vec![points])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::profile::SegmentKind;

    const TOL: f64 = 1e-9;

    fn assert_point(p: &ProfilePoint, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < TOL && (p.y - y).abs() < TOL,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn square_sharp_channel_outline() {
        let section = CSection::new(160.0, 60.0, 5.0, 8.0);
        let boundaries = section.generate().unwrap();
        assert_eq!(boundaries.len(), 1);
        let pts = &boundaries[0];

        assert_eq!(pts.len(), 10);
        assert!(pts.iter().all(|p| p.kind == SegmentKind::Line));

        assert_point(&pts[0], 0.0, 0.0);
        assert_point(&pts[1], 60.0, 0.0);
        assert_point(&pts[2], 60.0, 8.0);
        assert_point(&pts[3], 5.0, 8.0);
        assert_point(&pts[4], 5.0, 152.0);
        assert_point(&pts[5], 60.0, 152.0);
        assert_point(&pts[6], 60.0, 160.0);
        assert_point(&pts[7], 0.0, 160.0);
        assert_point(&pts[8], 0.0, 152.0);
        assert_point(&pts[9], 0.0, 0.0);
    }

    #[test]
    fn filleted_channel_has_four_arcs() {
        let mut section = CSection::new(160.0, 60.0, 5.0, 8.0);
        section.root_radius = 6.0;
        section.toe_radius = 3.0;
        let pts = &section.generate().unwrap()[0];
        assert_eq!(pts.len(), 14);
        let arcs = pts
            .iter()
            .filter(|p| matches!(p.kind, SegmentKind::Arc { .. }))
            .count();
        assert_eq!(arcs, 4);

        // Square flanges: toe fillet is tangent to the tip faces.
        assert_point(&pts[2], 60.0, 5.0);
        assert_point(&pts[3], 57.0, 8.0);
        // Root fillet is tangent to flange and web faces.
        assert_point(&pts[4], 11.0, 8.0);
        assert_point(&pts[5], 5.0, 14.0);
    }

    #[test]
    fn boundary_closes_with_sloped_flanges() {
        let mut section = CSection::new(200.0, 75.0, 8.5, 11.5);
        section.root_radius = 12.0;
        section.toe_radius = 4.5;
        section.flange_slope = 96.0;
        let pts = &section.generate().unwrap()[0];
        let first = &pts[0];
        let last = &pts[pts.len() - 1];
        assert!((first.x - last.x).abs() < TOL);
        assert!((first.y - last.y).abs() < TOL);
    }

    #[test]
    fn rejects_root_radius_that_overruns_the_outstand() {
        let mut section = CSection::new(160.0, 20.0, 5.0, 8.0);
        section.root_radius = 16.0;
        assert!(matches!(
            section.generate(),
            Err(SectionError::FilletTooLarge { name: "root_radius", .. })
        ));
    }

    #[test]
    fn rejects_negative_toe_radius() {
        let mut section = CSection::new(160.0, 60.0, 5.0, 8.0);
        section.toe_radius = -1.0;
        assert!(matches!(
            section.generate(),
            Err(SectionError::NegativeDimension { name: "toe_radius", .. })
        ));
    }
}
