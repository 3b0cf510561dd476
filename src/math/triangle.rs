//! Right-triangle and fillet-tangency helpers shared by the boundary
//! generators.
//!
//! Face slopes are carried as the signed offset from a square face in
//! degrees (an upright face has offset 0), so a triangle built from a
//! slope offset degenerates cleanly when the face is square.

/// A right triangle defined by its hypotenuse and one acute angle.
///
/// The legs are recomputed from the current fields on every access, so a
/// triangle is always consistent with the dimensions it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle {
    hypotenuse: f64,
    angle_deg: f64,
}

impl RightTriangle {
    /// Creates a triangle from a hypotenuse length and an angle in degrees.
    ///
    /// A zero hypotenuse yields a degenerate (zero-leg) triangle, which is
    /// valid input downstream.
    #[must_use]
    pub fn new(hypotenuse: f64, angle_deg: f64) -> Self {
        Self {
            hypotenuse,
            angle_deg,
        }
    }

    /// Leg opposite the angle: `hypotenuse · sin(angle)`.
    #[must_use]
    pub fn opposite(&self) -> f64 {
        self.hypotenuse * self.angle_deg.to_radians().sin()
    }

    /// Leg adjacent to the angle: `hypotenuse · cos(angle)`.
    #[must_use]
    pub fn adjacent(&self) -> f64 {
        self.hypotenuse * self.angle_deg.to_radians().cos()
    }
}

/// A fillet of given radius meeting one inclined face.
///
/// Two derived triangles locate the blend: [`FaceFillet::large`] gives the
/// fillet-center offsets along and across the face, and
/// [`FaceFillet::small`] gives the chord-to-tangent offset that places the
/// arc endpoint exactly where it leaves the straight face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFillet {
    radius: f64,
    face_angle_deg: f64,
}

impl FaceFillet {
    /// Creates a fillet helper from a radius and the face's slope offset
    /// in degrees.
    #[must_use]
    pub fn new(radius: f64, face_angle_deg: f64) -> Self {
        Self {
            radius,
            face_angle_deg,
        }
    }

    /// Radius of the fillet.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Triangle spanned by the radius against the face slope.
    #[must_use]
    pub fn large(&self) -> RightTriangle {
        RightTriangle::new(self.radius, self.face_angle_deg)
    }

    /// Triangle locating the tangent point on the face, built on the
    /// complement of the face angle.
    #[must_use]
    pub fn small(&self) -> RightTriangle {
        RightTriangle::new(
            self.large().opposite() / self.face_angle_deg.to_radians().cos(),
            90.0 - self.face_angle_deg,
        )
    }
}

/// A fillet meeting two differently sloped faces at once, as at the root
/// of an unequal-leg angle where both inclined leg faces converge on one
/// blend radius.
///
/// Exposes the large/small triangle pair independently per face. Unlike
/// [`FaceFillet`], the small triangles here are built on the face angle
/// itself, not its complement; the angle generator's offsets depend on
/// this convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualFaceFillet {
    radius: f64,
    long_angle_deg: f64,
    short_angle_deg: f64,
}

impl DualFaceFillet {
    /// Creates a dual-face fillet helper from a radius and the two faces'
    /// slope offsets in degrees.
    #[must_use]
    pub fn new(radius: f64, long_angle_deg: f64, short_angle_deg: f64) -> Self {
        Self {
            radius,
            long_angle_deg,
            short_angle_deg,
        }
    }

    /// Radius of the fillet.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius triangle against the long-side face.
    #[must_use]
    pub fn long_large(&self) -> RightTriangle {
        RightTriangle::new(self.radius, self.long_angle_deg)
    }

    /// Tangent triangle on the long-side face.
    #[must_use]
    pub fn long_small(&self) -> RightTriangle {
        RightTriangle::new(
            self.long_large().opposite() / self.long_angle_deg.to_radians().cos(),
            self.long_angle_deg,
        )
    }

    /// Radius triangle against the short-side face.
    #[must_use]
    pub fn short_large(&self) -> RightTriangle {
        RightTriangle::new(self.radius, self.short_angle_deg)
    }

    /// Tangent triangle on the short-side face.
    #[must_use]
    pub fn short_small(&self) -> RightTriangle {
        RightTriangle::new(
            self.short_large().opposite() / self.short_angle_deg.to_radians().cos(),
            self.short_angle_deg,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn legs_of_3_4_5_triangle() {
        // angle opposite the 3-leg: asin(3/5)
        let angle = (3.0f64 / 5.0).asin().to_degrees();
        let tri = RightTriangle::new(5.0, angle);
        assert!((tri.opposite() - 3.0).abs() < TOL, "opp={}", tri.opposite());
        assert!((tri.adjacent() - 4.0).abs() < TOL, "adj={}", tri.adjacent());
    }

    #[test]
    fn zero_hypotenuse_is_degenerate() {
        let tri = RightTriangle::new(0.0, 37.0);
        assert!(tri.opposite().abs() < TOL);
        assert!(tri.adjacent().abs() < TOL);
    }

    #[test]
    fn square_face_fillet_degenerates() {
        // Zero slope offset: the large triangle collapses onto the radius
        // and the tangent triangle vanishes.
        let fillet = FaceFillet::new(8.0, 0.0);
        assert!(fillet.large().opposite().abs() < TOL);
        assert!((fillet.large().adjacent() - 8.0).abs() < TOL);
        assert!(fillet.small().opposite().abs() < TOL);
        assert!(fillet.small().adjacent().abs() < TOL);
    }

    #[test]
    fn sloped_face_fillet_large_triangle() {
        let fillet = FaceFillet::new(10.0, 8.0);
        let large = fillet.large();
        assert!((large.opposite() - 10.0 * 8.0f64.to_radians().sin()).abs() < TOL);
        assert!((large.adjacent() - 10.0 * 8.0f64.to_radians().cos()).abs() < TOL);

        // Small triangle hypotenuse: large opposite / cos(angle), at the
        // complementary angle.
        let small = fillet.small();
        let hyp = large.opposite() / 8.0f64.to_radians().cos();
        assert!((small.opposite() - hyp * 82.0f64.to_radians().sin()).abs() < TOL);
    }

    #[test]
    fn dual_face_fillet_sides_are_independent() {
        let fillet = DualFaceFillet::new(10.0, 4.0, 2.0);
        assert!((fillet.long_large().opposite() - 10.0 * 4.0f64.to_radians().sin()).abs() < TOL);
        assert!((fillet.short_large().opposite() - 10.0 * 2.0f64.to_radians().sin()).abs() < TOL);

        // Small triangles reuse the face angle, not its complement.
        let long_small = fillet.long_small();
        let hyp = fillet.long_large().opposite() / 4.0f64.to_radians().cos();
        assert!((long_small.adjacent() - hyp * 4.0f64.to_radians().cos()).abs() < TOL);
    }

    #[test]
    fn dual_face_fillet_square_faces() {
        let fillet = DualFaceFillet::new(10.0, 0.0, 0.0);
        assert!((fillet.long_large().adjacent() - 10.0).abs() < TOL);
        assert!((fillet.short_large().adjacent() - 10.0).abs() < TOL);
        assert!(fillet.long_small().adjacent().abs() < TOL);
        assert!(fillet.short_small().adjacent().abs() < TOL);
    }
}
