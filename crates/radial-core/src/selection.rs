//! Angle-based sector hit testing.
//!
//! Every sector owns a window of `360 / n` degrees centered on its declared
//! angle, whatever the spacing between declared angles. When windows overlap
//! the sector declared first wins; a cursor exactly on a window edge belongs
//! to neither neighbour.

use crate::geometry::Point;
use crate::sector::Sector;

/// Wraps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle of `cursor` around `center` in degrees, counter-clockwise from the
/// positive x axis, with screen y growing downward.
pub fn cursor_angle(center: Point, cursor: Point) -> f64 {
    let delta = cursor - center;
    normalize_degrees((-delta.y).atan2(delta.x).to_degrees())
}

/// Signed shortest rotation from `b` to `a`, in `[-180, 180)`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

/// Angular width of each sector's selection window.
pub fn window_width(sector_count: usize) -> f64 {
    360.0 / sector_count as f64
}

/// Returns the index of the sector under `cursor`, or `None` inside the dead
/// zone or between windows. `radius` does not bound selection: a cursor past
/// the drawn disc still picks by angle.
pub fn compute_hot_sector(
    center: Point,
    cursor: Point,
    sectors: &[Sector],
    radius: f64,
    dead_zone_radius: f64,
) -> Option<usize> {
    if center.distance_to(cursor) < dead_zone_radius {
        return None;
    }

    let angle = cursor_angle(center, cursor);
    let half_width = window_width(sectors.len()) / 2.0;

    sectors
        .iter()
        .position(|sector| angle_difference(angle, sector.angle).abs() < half_width)
}

/// Pairs of sectors (by index) whose selection windows overlap. The later
/// sector of each pair is shadowed by the earlier one inside the overlap.
pub fn overlapping_sectors(sectors: &[Sector]) -> Vec<(usize, usize)> {
    let width = window_width(sectors.len());
    let mut pairs = Vec::new();
    for (i, a) in sectors.iter().enumerate() {
        for (j, b) in sectors.iter().enumerate().skip(i + 1) {
            if angle_difference(a.angle, b.angle).abs() < width {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
