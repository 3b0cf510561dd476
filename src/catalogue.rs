//! Adapters from catalogued rolled-section records to dimension sets.
//!
//! A catalogue record carries the nominal dimensions of a standard rolled
//! section under the catalogue's own field names. The conversions here
//! are field renamings only: no unit conversion, no lookup. Persistence
//! and retrieval of the records themselves is an external concern.

use crate::section::{AngleLeg, CSection, ChsSection, HSection, LSection, RhsSection};

/// Catalogued rolled I/H section record.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledHShape {
    /// Catalogue designation, e.g. `"IPE 400"`.
    pub designation: String,
    /// Overall depth.
    pub h: f64,
    /// Flange width.
    pub bf: f64,
    /// Web thickness.
    pub tw: f64,
    /// Flange thickness.
    pub tf: f64,
    /// Root radius.
    pub r1: f64,
    /// Toe radius.
    pub r2: f64,
    /// Flange slope in degrees.
    pub alpha: f64,
}

impl From<&RolledHShape> for HSection {
    fn from(record: &RolledHShape) -> Self {
        Self {
            depth: record.h,
            flange_width: record.bf,
            web_thickness: record.tw,
            flange_thickness: record.tf,
            root_radius: record.r1,
            toe_radius: record.r2,
            flange_slope: record.alpha,
        }
    }
}

/// Catalogued rolled channel record.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledCShape {
    /// Catalogue designation, e.g. `"UPN 200"`.
    pub designation: String,
    /// Overall depth.
    pub h: f64,
    /// Flange width.
    pub bf: f64,
    /// Web thickness.
    pub tw: f64,
    /// Flange thickness.
    pub tf: f64,
    /// Root radius.
    pub r1: f64,
    /// Toe radius.
    pub r2: f64,
    /// Flange slope in degrees.
    pub alpha: f64,
}

impl From<&RolledCShape> for CSection {
    fn from(record: &RolledCShape) -> Self {
        Self {
            depth: record.h,
            flange_width: record.bf,
            web_thickness: record.tw,
            flange_thickness: record.tf,
            root_radius: record.r1,
            toe_radius: record.r2,
            flange_slope: record.alpha,
        }
    }
}

/// Catalogued rolled angle record.
///
/// Catalogues quote one thickness and one toe radius shared by both legs;
/// the leg faces are square unless a slope is recorded elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledLShape {
    /// Catalogue designation, e.g. `"L 150x100x14"`.
    pub designation: String,
    /// Long leg length.
    pub l: f64,
    /// Short leg length.
    pub b: f64,
    /// Leg thickness.
    pub tw: f64,
    /// Root radius.
    pub r1: f64,
    /// Toe radius.
    pub r2: f64,
}

impl From<&RolledLShape> for LSection {
    fn from(record: &RolledLShape) -> Self {
        let mut long_leg = AngleLeg::new(record.l, record.tw);
        long_leg.toe_radius = record.r2;
        let mut short_leg = AngleLeg::new(record.b, record.tw);
        short_leg.toe_radius = record.r2;
        let mut section = Self::new(long_leg, short_leg);
        section.root_radius = record.r1;
        section
    }
}

/// Catalogued rolled box (RHS/SHS) record.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledBoxShape {
    /// Catalogue designation, e.g. `"SHS 100x100x5"`.
    pub designation: String,
    /// Overall depth.
    pub h: f64,
    /// Overall width.
    pub b: f64,
    /// Wall thickness.
    pub tw: f64,
    /// Outer corner radius.
    pub r1: f64,
    /// Inner corner radius.
    pub r2: f64,
}

impl From<&RolledBoxShape> for RhsSection {
    fn from(record: &RolledBoxShape) -> Self {
        Self {
            depth: record.h,
            width: record.b,
            wall_thickness: record.tw,
            outer_radius: record.r1,
            inner_radius: record.r2,
        }
    }
}

/// Catalogued rolled circular tube record.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledOShape {
    /// Catalogue designation, e.g. `"CHS 114.3x6.3"`.
    pub designation: String,
    /// Outer diameter.
    pub od: f64,
    /// Wall thickness.
    pub tw: f64,
}

impl RolledOShape {
    /// Builds the circular section for this record.
    ///
    /// The tessellation count is generation configuration, not catalogue
    /// data, so the caller supplies it.
    #[must_use]
    pub fn section(&self, segments: u32) -> ChsSection {
        ChsSection::new(self.od, self.tw, segments)
    }
}
