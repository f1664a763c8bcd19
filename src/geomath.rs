//! Geometry helpers: centroid, bearing, distance, rotation, bounding boxes,
//! and line slicing.
//!
//! Angles are in degrees, compass style: 0° is north and positive angles turn
//! clockwise. Feature rotation travels along rhumb lines on the sphere, so a
//! rotation preserves each vertex's rhumb distance from the pivot and rotating
//! by `θ` then `-θ` returns the original coordinates. Guide construction uses
//! the planar helpers (`distance`, `rotate_planar`, `line_slice`) because the
//! enveloping box is already aligned with the screen.

#[cfg(test)]
#[path = "geomath_test.rs"]
mod geomath_test;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::geo::{Geometry, Position};

/// `[min_x, min_y, max_x, max_y]`.
pub type BBox = [f64; 4];

/// Below this, a Mercator-stretched latitude delta is treated as zero.
const RHUMB_PSI_EPSILON: f64 = 10e-12;

// ── Centroid / bbox ─────────────────────────────────────────────

/// Center of mass of everything in `geometries`.
///
/// This is the area centroid of the convex hull of every position, so extra
/// vertices along an edge do not pull it. When the hull encloses no area
/// (a lone point, collinear positions) it falls back to [`vertex_mean`].
/// Returns `None` when there are no positions at all.
#[must_use]
pub fn centroid<'a, I>(geometries: I) -> Option<Position>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let geometries: Vec<&Geometry> = geometries.into_iter().collect();
    let mean = vertex_mean(geometries.iter().copied())?;
    let hull = convex_hull(geometries.iter().flat_map(|g| g.positions()).collect());
    Some(area_centroid(&hull).unwrap_or(mean))
}

/// Mean of every distinct vertex across `geometries`.
///
/// Polygon ring-closing positions are not counted twice. Returns `None` when
/// there are no vertices at all.
#[must_use]
pub fn vertex_mean<'a, I>(geometries: I) -> Option<Position>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    mean(geometries.into_iter().flat_map(Geometry::vertices))
}

fn mean(points: impl IntoIterator<Item = Position>) -> Option<Position> {
    let mut sum = [0.0, 0.0];
    let mut count = 0usize;
    for [x, y] in points {
        sum[0] += x;
        sum[1] += y;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    Some([sum[0] / n, sum[1] / n])
}

/// z component of `(a - o) × (b - o)`; positive when `o → a → b` turns left.
fn cross(o: Position, a: Position, b: Position) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

/// Convex hull as an open counter-clockwise ring (monotone chain).
///
/// Collinear and duplicate positions are dropped. Fewer than three distinct
/// positions come back as-is.
#[must_use]
pub fn convex_hull(mut points: Vec<Position>) -> Vec<Position> {
    points.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    let mut hull = half_hull(points.iter());
    hull.extend(half_hull(points.iter().rev()));
    hull
}

/// One side of the monotone chain, without its final point.
fn half_hull<'a>(chain: impl Iterator<Item = &'a Position>) -> Vec<Position> {
    let mut out: Vec<Position> = Vec::new();
    for &p in chain {
        while let &[.., o, a] = out.as_slice() {
            if cross(o, a, p) > 0.0 {
                break;
            }
            out.pop();
        }
        out.push(p);
    }
    out.pop();
    out
}

/// Area-weighted centroid of an open ring, or `None` when it has no area.
///
/// Positions are shifted to the ring's vertex mean first to keep the cross
/// products small.
fn area_centroid(ring: &[Position]) -> Option<Position> {
    if ring.len() < 3 {
        return None;
    }
    let origin = mean(ring.iter().copied())?;
    let (mut twice_area, mut sx, mut sy) = (0.0, 0.0, 0.0);
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        let (ax, ay) = (a[0] - origin[0], a[1] - origin[1]);
        let (bx, by) = (b[0] - origin[0], b[1] - origin[1]);
        let c = ax * by - bx * ay;
        twice_area += c;
        sx += (ax + bx) * c;
        sy += (ay + by) * c;
    }
    if twice_area == 0.0 {
        return None;
    }
    let k = 1.0 / (3.0 * twice_area);
    Some([origin[0] + k * sx, origin[1] + k * sy])
}

/// Axis-aligned bounds of every position across `geometries`.
#[must_use]
pub fn bbox<'a, I>(geometries: I) -> Option<BBox>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let mut out: Option<BBox> = None;
    for geometry in geometries {
        for [x, y] in geometry.positions() {
            out = Some(match out {
                None => [x, y, x, y],
                Some([w, s, e, n]) => [w.min(x), s.min(y), e.max(x), n.max(y)],
            });
        }
    }
    out
}

/// Closed polygon tracing `bbox` counter-clockwise from the south-west corner.
#[must_use]
pub fn bbox_polygon(bbox: BBox) -> Geometry {
    let [w, s, e, n] = bbox;
    Geometry::Polygon(vec![vec![[w, s], [e, s], [e, n], [w, n], [w, s]]])
}

/// Outline of a polygonal geometry as lines.
///
/// A single-ring polygon becomes a `LineString`; anything with more rings (or
/// a multipolygon) becomes a `MultiLineString`. Other geometries are returned
/// unchanged.
#[must_use]
pub fn polygon_to_line(geometry: &Geometry) -> Geometry {
    match geometry {
        Geometry::Polygon(rings) if rings.len() == 1 => Geometry::LineString(rings[0].clone()),
        Geometry::Polygon(rings) => Geometry::MultiLineString(rings.clone()),
        Geometry::MultiPolygon(polys) => Geometry::MultiLineString(polys.iter().flatten().cloned().collect()),
        other => other.clone(),
    }
}

// ── Planar helpers ──────────────────────────────────────────────

/// Euclidean distance in coordinate units.
#[must_use]
pub fn distance(a: Position, b: Position) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}

/// Point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: Position, b: Position) -> Position {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}

/// Rotate `p` clockwise by `angle` degrees about `pivot` in the plane (y up).
#[must_use]
pub fn rotate_planar(p: Position, angle: f64, pivot: Position) -> Position {
    let (sin, cos) = angle.to_radians().sin_cos();
    let dx = p[0] - pivot[0];
    let dy = p[1] - pivot[1];
    [pivot[0] + dx * cos + dy * sin, pivot[1] - dx * sin + dy * cos]
}

/// Nearest point on segment `a..b` to `p`, and its parameter along the segment.
fn project_on_segment(p: Position, a: Position, b: Position) -> (Position, f64) {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (a, 0.0);
    }
    let t = (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len_sq).clamp(0.0, 1.0);
    ([a[0] + t * dx, a[1] + t * dy], t)
}

/// Nearest point on `line` to `p` with the index of the segment it lies on.
fn nearest_on_line(p: Position, line: &[Position]) -> Option<(Position, usize)> {
    if let [only] = line {
        return Some((*only, 0));
    }
    let mut best: Option<(Position, usize, f64)> = None;
    for (i, seg) in line.windows(2).enumerate() {
        let (q, _) = project_on_segment(p, seg[0], seg[1]);
        let d = distance(p, q);
        if best.is_none_or(|(_, _, bd)| d < bd) {
            best = Some((q, i, d));
        }
    }
    best.map(|(q, i, _)| (q, i))
}

/// The part of `line` between the points on it nearest to `start` and `stop`.
///
/// The result begins at whichever of the two projections lies on the earlier
/// segment (`start` on a tie) and includes every interior vertex between them.
/// Returns `None` for an empty line.
#[must_use]
pub fn line_slice(start: Position, stop: Position, line: &[Position]) -> Option<Vec<Position>> {
    let start_hit = nearest_on_line(start, line)?;
    let stop_hit = nearest_on_line(stop, line)?;
    let (first, last) = if start_hit.1 <= stop_hit.1 { (start_hit, stop_hit) } else { (stop_hit, start_hit) };

    let mut out = vec![first.0];
    out.extend(line.iter().take(last.1 + 1).skip(first.1 + 1).copied());
    out.push(last.0);
    Some(out)
}

// ── Spherical helpers ───────────────────────────────────────────

/// Initial great-circle bearing from `from` to `to`, in `(-180, 180]` degrees.
#[must_use]
pub fn bearing(from: Position, to: Position) -> f64 {
    let lon1 = from[0].to_radians();
    let lon2 = to[0].to_radians();
    let lat1 = from[1].to_radians();
    let lat2 = to[1].to_radians();
    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();
    a.atan2(b).to_degrees()
}

/// Difference of Mercator-projected latitudes.
fn delta_psi(lat1: f64, lat2: f64) -> f64 {
    ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Constant-heading bearing from `from` to `to`, in `[0, 360)` degrees.
#[must_use]
pub fn rhumb_bearing(from: Position, to: Position) -> f64 {
    let lat1 = from[1].to_radians();
    let lat2 = to[1].to_radians();
    let mut d_lon = (to[0] - from[0]).to_radians();
    if d_lon > PI {
        d_lon -= 2.0 * PI;
    }
    if d_lon < -PI {
        d_lon += 2.0 * PI;
    }
    (d_lon.atan2(delta_psi(lat1, lat2)).to_degrees() + 360.0) % 360.0
}

/// Rhumb-line distance from `from` to `to` as a central angle in radians.
#[must_use]
pub fn rhumb_distance(from: Position, to: Position) -> f64 {
    let lat1 = from[1].to_radians();
    let lat2 = to[1].to_radians();
    let d_lat = lat2 - lat1;
    let mut d_lon = (to[0] - from[0]).abs().to_radians();
    if d_lon > PI {
        d_lon -= 2.0 * PI;
    }
    let d_psi = delta_psi(lat1, lat2);
    let q = if d_psi.abs() > RHUMB_PSI_EPSILON { d_lat / d_psi } else { lat1.cos() };
    (d_lat * d_lat + q * q * d_lon * d_lon).sqrt()
}

/// Travel `angular_distance` radians from `origin` along a rhumb line at `bearing` degrees.
#[must_use]
pub fn rhumb_destination(origin: Position, angular_distance: f64, bearing: f64) -> Position {
    let lon1 = origin[0].to_radians();
    let lat1 = origin[1].to_radians();
    let theta = bearing.to_radians();

    let d_lat = angular_distance * theta.cos();
    let mut lat2 = lat1 + d_lat;
    if lat2.abs() > FRAC_PI_2 {
        lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
    }
    let d_psi = delta_psi(lat1, lat2);
    let q = if d_psi.abs() > RHUMB_PSI_EPSILON { d_lat / d_psi } else { lat1.cos() };
    let d_lon = angular_distance * theta.sin() / q;

    let mut lon = ((lon1 + d_lon).to_degrees() + 540.0) % 360.0 - 180.0;
    // Keep the result on the same side of the antimeridian as the origin.
    if lon - origin[0] > 180.0 {
        lon -= 360.0;
    } else if origin[0] - lon > 180.0 {
        lon += 360.0;
    }
    [lon, lat2.to_degrees()]
}

/// Rotate a single position by `angle` degrees (clockwise) about `pivot`.
#[must_use]
pub fn rotate_position(p: Position, angle: f64, pivot: Position) -> Position {
    if p == pivot {
        return p;
    }
    let heading = rhumb_bearing(pivot, p) + angle;
    rhumb_destination(pivot, rhumb_distance(pivot, p), heading)
}

/// Rotate every position of `geometry` by `angle` degrees (clockwise) about `pivot`.
///
/// A zero angle returns the geometry unchanged, bit for bit.
#[must_use]
pub fn rotate_about(geometry: &Geometry, angle: f64, pivot: Position) -> Geometry {
    if angle == 0.0 {
        return geometry.clone();
    }
    geometry.map_positions(|p| rotate_position(p, angle, pivot))
}

/// Angle swept about `pivot` by a pointer moving from `start` to `current`.
#[must_use]
pub fn rotation_angle(pivot: Position, start: Position, current: Position) -> f64 {
    bearing(pivot, current) - bearing(pivot, start)
}
