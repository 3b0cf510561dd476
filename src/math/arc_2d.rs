/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::PI;

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `(cx, cy, radius, start_angle, sweep_angle)`.
///
/// # Panics
///
/// Does not panic. Returns degenerate values for zero-length chords.
#[must_use]
pub fn arc_from_bulge(x0: f64, y0: f64, x1: f64, y1: f64, bulge: f64) -> (f64, f64, f64, f64, f64) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let chord_len = (dx * dx + dy * dy).sqrt();

    if chord_len < 1e-12 {
        return (x0, y0, 0.0, 0.0, 0.0);
    }

    // Distance from chord midpoint to center.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mx = (x0 + x1) * 0.5;
    let my = (y0 + y1) * 0.5;

    // Normal to chord pointing toward center (for positive bulge, center is left of chord).
    let nx = -dy / chord_len;
    let ny = dx / chord_len;

    let cx = mx + sagitta_ratio * (chord_len * 0.5) * nx;
    let cy = my + sagitta_ratio * (chord_len * 0.5) * ny;

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    let start_angle = (y0 - cy).atan2(x0 - cx);

    let sweep = 4.0 * bulge.atan();

    // Normalize sweep to [-2π, 2π] range.
    let sweep = if sweep > 2.0 * PI {
        sweep - 2.0 * PI
    } else if sweep < -2.0 * PI {
        sweep + 2.0 * PI
    } else {
        sweep
    };

    (cx, cy, radius, start_angle, sweep)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(
    cx: f64, cy: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    t: f64,
) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Computes the signed bulge of a minor arc spanning a chord of length
/// `chord` with the given `radius`.
///
/// Fillet arcs never exceed a semicircle, so the minor solution of
/// `sin(sweep/2) = chord / (2·radius)` is taken. `ccw` selects the sign:
/// positive bulge for counter-clockwise, negative for clockwise.
///
/// A radius smaller than half the chord cannot span it; the ratio clamps
/// and the arc degenerates to a semicircle.
#[must_use]
pub fn fillet_bulge(chord: f64, radius: f64, ccw: bool) -> f64 {
    if radius < 1e-12 || chord < 1e-12 {
        return 0.0;
    }
    let ratio = (chord / (2.0 * radius)).clamp(-1.0, 1.0);
    let sweep = 2.0 * ratio.asin();
    let bulge = (sweep / 4.0).tan();
    if ccw { bulge } else { -bulge }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw() {
        // CCW semicircle from (0,0) to (2,0), bulge=1.
        // Center at (1,0), radius=1, sweep=+π.
        // Arc goes from angle π → 3π/2 → 2π (through bottom).
        let (cx, cy, r, sa, sw) = arc_from_bulge(0.0, 0.0, 2.0, 0.0, 1.0);
        assert!((cx - 1.0).abs() < TOL, "cx={cx}");
        assert!(cy.abs() < TOL, "cy={cy}");
        assert!((r - 1.0).abs() < TOL, "r={r}");
        assert!((sw - PI).abs() < TOL, "sweep={sw}");

        let p0 = arc_point_at(cx, cy, r, sa, sw, 0.0);
        assert!(p0.0.abs() < TOL, "p0.x={}", p0.0);
        assert!(p0.1.abs() < TOL, "p0.y={}", p0.1);

        let p1 = arc_point_at(cx, cy, r, sa, sw, 1.0);
        assert!((p1.0 - 2.0).abs() < TOL, "p1.x={}", p1.0);
        assert!(p1.1.abs() < TOL, "p1.y={}", p1.1);

        // Midpoint at angle 3π/2 → (1, -1) (through bottom for CCW)
        let pm = arc_point_at(cx, cy, r, sa, sw, 0.5);
        assert!((pm.0 - 1.0).abs() < TOL, "pm.x={}", pm.0);
        assert!((pm.1 + 1.0).abs() < TOL, "pm.y={}", pm.1);
    }

    #[test]
    fn semicircle_cw_goes_through_top() {
        // CW semicircle from (0,0) to (2,0), bulge=-1.
        // Sweep=-π, arc goes π → π/2 → 0 (through top).
        let (cx, cy, r, sa, sw) = arc_from_bulge(0.0, 0.0, 2.0, 0.0, -1.0);
        assert!((cx - 1.0).abs() < TOL, "cx={cx}");
        assert!(cy.abs() < TOL, "cy={cy}");
        assert!((r - 1.0).abs() < TOL, "r={r}");
        assert!((sw + PI).abs() < TOL, "sweep={sw}");

        // Midpoint at angle π/2 → (1, 1)
        let pm = arc_point_at(cx, cy, r, sa, sw, 0.5);
        assert!((pm.0 - 1.0).abs() < TOL, "pm.x={}", pm.0);
        assert!((pm.1 - 1.0).abs() < TOL, "pm.y={}", pm.1);
    }

    #[test]
    fn quarter_circle_ccw() {
        // CCW quarter circle from (1,0) to (0,1), center at origin.
        // sweep = +π/2 (CCW), goes through first quadrant.
        let bulge = (PI / 8.0).tan();
        let (cx, cy, r, sa, sw) = arc_from_bulge(1.0, 0.0, 0.0, 1.0, bulge);
        assert!((r - 1.0).abs() < 1e-6, "r={r}");
        assert!(cx.abs() < 1e-6, "cx={cx}");
        assert!(cy.abs() < 1e-6, "cy={cy}");
        assert!((sw - PI / 2.0).abs() < 1e-6, "sweep={sw}");

        let p0 = arc_point_at(cx, cy, r, sa, sw, 0.0);
        assert!((p0.0 - 1.0).abs() < 1e-6);
        assert!(p0.1.abs() < 1e-6);

        // Midpoint at angle π/4 → (cos(π/4), sin(π/4))
        let pm = arc_point_at(cx, cy, r, sa, sw, 0.5);
        let expected = (PI / 4.0).cos();
        assert!((pm.0 - expected).abs() < 1e-6, "pm.x={}", pm.0);
        assert!((pm.1 - expected).abs() < 1e-6, "pm.y={}", pm.1);
    }

    #[test]
    fn fillet_bulge_quarter_arc() {
        // Quarter circle of radius 1: chord = √2, sweep = π/2,
        // bulge = tan(π/8).
        let chord = 2.0f64.sqrt();
        let bulge = fillet_bulge(chord, 1.0, true);
        assert!((bulge - (PI / 8.0).tan()).abs() < TOL, "bulge={bulge}");

        let bulge_cw = fillet_bulge(chord, 1.0, false);
        assert!((bulge_cw + (PI / 8.0).tan()).abs() < TOL, "bulge_cw={bulge_cw}");
    }

    #[test]
    fn fillet_bulge_semicircle() {
        // Chord equal to the diameter: semicircle, |bulge| = 1.
        let bulge = fillet_bulge(2.0, 1.0, true);
        assert!((bulge - 1.0).abs() < TOL, "bulge={bulge}");
    }

    #[test]
    fn fillet_bulge_clamps_short_radius() {
        // Radius too small to span the chord: clamps to a semicircle.
        let bulge = fillet_bulge(4.0, 1.0, true);
        assert!((bulge - 1.0).abs() < TOL, "bulge={bulge}");
    }

    #[test]
    fn fillet_bulge_roundtrip() {
        // A bulge computed for a chord/radius pair must reproduce that
        // radius through arc_from_bulge.
        let bulge = fillet_bulge(1.0, 3.0, true);
        let (_, _, r, _, sw) = arc_from_bulge(0.0, 0.0, 1.0, 0.0, bulge);
        assert!((r - 3.0).abs() < 1e-9, "r={r}");
        assert!(sw > 0.0);
    }

    #[test]
    fn degenerate_chord() {
        let (cx, cy, r, _, sw) = arc_from_bulge(1.0, 1.0, 1.0, 1.0, 0.5);
        assert!((cx - 1.0).abs() < TOL);
        assert!((cy - 1.0).abs() < TOL);
        assert!(r.abs() < TOL);
        assert!(sw.abs() < TOL);
    }
}
