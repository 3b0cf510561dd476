use crate::math::arc_2d::{arc_from_bulge, arc_point_at};
use crate::math::polygon_2d::{bounding_box_2d, signed_area_2d};
use crate::math::Point2;

/// Bulge-encoded contour vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl ContourVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }
}

/// One closed boundary loop of a cross-section, with mixed straight-line
/// and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed contours, the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub vertices: Vec<ContourVertex>,
    pub closed: bool,
}

impl Contour {
    /// Converts this contour to a list of points by tessellating arcs into
    /// line segments.
    ///
    /// `tolerance` controls the maximum deviation between the arc and its
    /// chord approximation. For a closed contour the first point is
    /// repeated at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(n * 2);

        for i in 0..seg_count {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            // Always add start point of segment.
            if i == 0 {
                points.push(Point2::new(v0.x, v0.y));
            }

            if v0.bulge.abs() < 1e-12 {
                // Straight line: just add endpoint.
                points.push(Point2::new(v1.x, v1.y));
            } else {
                // Arc: tessellate into line segments.
                let (cx, cy, radius, start_angle, sweep) =
                    arc_from_bulge(v0.x, v0.y, v1.x, v1.y, v0.bulge);

                if radius < 1e-12 {
                    points.push(Point2::new(v1.x, v1.y));
                    continue;
                }

                // Number of subdivisions based on tolerance.
                let n_sub = arc_subdivision_count(radius, sweep.abs(), tolerance);

                for j in 1..n_sub {
                    let t = f64::from(j) / f64::from(n_sub);
                    let (px, py) = arc_point_at(cx, cy, radius, start_angle, sweep, t);
                    points.push(Point2::new(px, py));
                }
                points.push(Point2::new(v1.x, v1.y));
            }
        }

        points
    }

    /// Returns a new contour with vertices in reverse order and negated
    /// bulges.
    ///
    /// For a segment `v[i] → v[i+1]` with bulge `b`, the reversed segment
    /// `v[i+1] → v[i]` has bulge `-b` (arc direction flips).
    #[must_use]
    pub fn reversed(&self) -> Self {
        let m = self.vertices.len();
        if m == 0 {
            return self.clone();
        }
        let mut new_verts = Vec::with_capacity(m);
        for j in 0..m {
            let orig_idx = m - 1 - j;
            // In the reversed contour, vertex j connects to vertex j+1,
            // which corresponds to the reverse of original segment (m-2-j);
            // the closing segment wraps to the original last segment.
            let bulge = if j < m - 1 {
                -self.vertices[m - 2 - j].bulge
            } else if self.closed {
                -self.vertices[m - 1].bulge
            } else {
                0.0
            };
            new_verts.push(ContourVertex::new(
                self.vertices[orig_idx].x,
                self.vertices[orig_idx].y,
                bulge,
            ));
        }
        Self {
            vertices: new_verts,
            closed: self.closed,
        }
    }

    /// Returns the number of segments in this contour.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Signed area enclosed by the tessellated contour (shoelace formula).
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self, tolerance: f64) -> f64 {
        signed_area_2d(&self.to_points(tolerance))
    }

    /// Axis-aligned bounding box of the tessellated contour.
    #[must_use]
    pub fn bounding_box(&self, tolerance: f64) -> Option<(Point2, Point2)> {
        bounding_box_2d(&self.to_points(tolerance))
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
