use tracing::debug;

use crate::error::{Result, SectionError};
use crate::math::triangle::{FaceFillet, RightTriangle};
use crate::profile::{ProfilePoint, SweepDirection};

use super::{require_fillet_fits, require_non_negative, require_positive, require_slope};

/// Dimension set for a hot-rolled I/H section.
///
/// The flange thickness is measured at the quarter point of the half
/// flange, `(B - Tw)/4` in from the flange tip, which is where rolled
/// I/H catalogues quote it for tapered flanges. The section is symmetric
/// about both axes; the boundary is a single closed loop with a toe and a
/// root fillet at each of the four flange/web junctions.
#[derive(Debug, Clone, PartialEq)]
pub struct HSection {
    /// Overall depth `H`.
    pub depth: f64,
    /// Flange width `B`.
    pub flange_width: f64,
    /// Web thickness `Tw`.
    pub web_thickness: f64,
    /// Flange thickness `Tf`, measured at `(B - Tw)/4` from the tip.
    pub flange_thickness: f64,
    /// Fillet radius at the flange-to-web junctions.
    pub root_radius: f64,
    /// Fillet radius at the flange tips.
    pub toe_radius: f64,
    /// Absolute slope of the inner flange faces in degrees; 90 means
    /// square (untapered) flanges.
    pub flange_slope: f64,
}

impl HSection {
    /// Creates a sharp-cornered, square-flanged section; set the radii
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
    /// negative radii, fillets that do not fit the flange outstand or the
    /// web face, a toe radius beyond half the flange thickness, or a
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
        let outstand = (self.flange_width - self.web_thickness) / 2.0;
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

        // Inclined flange face between the two fillet tangent points.
        let main_horizontal = (self.flange_width / 2.0) - (self.web_thickness / 2.0)
            - (self.root_radius - root_large.opposite())
            - (self.toe_radius - toe_large.opposite());
        let main_hypotenuse = main_horizontal / slope.to_radians().cos();
        let flange_tri = RightTriangle::new(main_hypotenuse, 90.0 - slope);

        let apex_to_thickness = ((self.flange_width - self.web_thickness) / 4.0)
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

        // Toe, bottom right.
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

        // Root, bottom right.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                (b / 2.0) + (tw / 2.0),
                height_at_root,
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line((b / 2.0) + (tw / 2.0), h - height_at_root));

        // Root, top right.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                (b / 2.0) + (tw / 2.0) + (self.root_radius - root_large.opposite()),
                h - height_at_root + root_large.adjacent(),
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line(
            b - (self.toe_radius - toe_large.opposite()),
            h - height_at_root + root_large.adjacent() + flange_tri.adjacent(),
        ));

        // Toe, top right.
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

        // Toe, top left.
        if self.toe_radius > 0.0 {
            points.push(ProfilePoint::arc(
                self.toe_radius - toe_large.opposite(),
                h - height_at_root + root_large.adjacent() + flange_tri.adjacent(),
                self.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        points.push(ProfilePoint::line(
            self.toe_radius - toe_large.opposite() + flange_tri.opposite(),
            h - height_at_root + root_large.adjacent(),
        ));

        // Root, top left.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                (b / 2.0) - (tw / 2.0),
                h - height_at_root,
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line((b / 2.0) - (tw / 2.0), height_at_root));

        // Root, bottom left.
        if self.root_radius > 0.0 {
            points.push(ProfilePoint::arc(
                (b / 2.0) - (tw / 2.0) - (self.root_radius - root_large.opposite()),
                height_at_root - root_large.adjacent(),
                self.root_radius,
                SweepDirection::Clockwise,
            ));
        }

        points.push(ProfilePoint::line(
            (b / 2.0) - (tw / 2.0) - (self.root_radius - root_large.opposite())
                - flange_tri.opposite(),
            height_at_root - root_large.adjacent() - flange_tri.adjacent(),
        ));

        // Toe, bottom left.
        if self.toe_radius > 0.0 {
            points.push(ProfilePoint::arc(
                0.0,
                height_at_root - root_large.adjacent() - flange_tri.adjacent()
                    - toe_large.adjacent(),
                self.toe_radius,
                SweepDirection::CounterClockwise,
            ));
        }

        points.push(ProfilePoint::line(0.0, 0.0));

        debug!(points = points.len(), "generated I/H boundary");
        Ok(vec![points])
    }
}
