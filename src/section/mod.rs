//! Boundary generators for the supported cross-section families.
//!
//! Each family turns a set of nominal dimensions into one or more ordered,
//! closed boundary sequences of [`ProfilePoint`]s. Generation is a pure
//! function of the current dimension snapshot: nothing is cached, and two
//! calls with unchanged dimensions produce bit-identical sequences.

pub mod c;
pub mod chs;
pub mod h;
pub mod l;
pub mod rhs;

pub use c::CSection;
pub use chs::ChsSection;
pub use h::HSection;
pub use l::{AngleLeg, LSection};
pub use rhs::RhsSection;

use crate::error::{Result, SectionError};
use crate::profile::{Contour, ContourBuilder, ProfilePoint};

/// Slope offsets whose cosine falls below this bound make the face
/// direction numerically degenerate and are rejected.
pub(crate) const MIN_FACE_COS: f64 = 1e-3;

/// The closed set of supported cross-section families.
///
/// The shape set is fixed, so dispatch is a plain sum type rather than an
/// open trait object.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionGeometry {
    H(HSection),
    C(CSection),
    L(LSection),
    Rhs(RhsSection),
    Chs(ChsSection),
}

impl SectionGeometry {
    /// Generates the boundary point sequences for this section.
    ///
    /// Solid families (H, C, L) produce one boundary; hollow families
    /// produce two (outer counter-clockwise, inner clockwise).
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    pub fn generate(&self) -> Result<Vec<Vec<ProfilePoint>>> {
        match self {
            Self::H(section) => section.generate(),
            Self::C(section) => section.generate(),
            Self::L(section) => section.generate(),
            Self::Rhs(section) => section.generate(),
            Self::Chs(section) => section.generate(),
        }
    }

    /// Generates and assembles the closed contours for this section.
    ///
    /// # Errors
    ///
    /// Returns a [`SectionError`] if the dimensions fail validation.
    pub fn contours(&self) -> Result<Vec<Contour>> {
        let boundaries = self.generate()?;
        Ok(ContourBuilder::new(&boundaries).build())
    }
}

impl From<HSection> for SectionGeometry {
    fn from(section: HSection) -> Self {
        Self::H(section)
    }
}

impl From<CSection> for SectionGeometry {
    fn from(section: CSection) -> Self {
        Self::C(section)
    }
}

impl From<LSection> for SectionGeometry {
    fn from(section: LSection) -> Self {
        Self::L(section)
    }
}

impl From<RhsSection> for SectionGeometry {
    fn from(section: RhsSection) -> Self {
        Self::Rhs(section)
    }
}

impl From<ChsSection> for SectionGeometry {
    fn from(section: ChsSection) -> Self {
        Self::Chs(section)
    }
}

/// Rejects a zero or negative primary dimension.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SectionError::NonPositiveDimension { name, value })
    }
}

/// Rejects a negative fillet radius.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SectionError::NegativeDimension { name, value })
    }
}

/// Rejects a slope whose offset from a square face is numerically
/// degenerate (cosine of the offset near zero).
pub(crate) fn require_slope(degrees: f64) -> Result<()> {
    if (degrees - 90.0).to_radians().cos().abs() < MIN_FACE_COS {
        Err(SectionError::DegenerateSlope { degrees })
    } else {
        Ok(())
    }
}

/// Rejects a fillet radius larger than the face length available to it.
pub(crate) fn require_fillet_fits(name: &'static str, radius: f64, limit: f64) -> Result<()> {
    if radius > limit {
        Err(SectionError::FilletTooLarge {
            name,
            radius,
            limit,
        })
    } else {
        Ok(())
    }
}
