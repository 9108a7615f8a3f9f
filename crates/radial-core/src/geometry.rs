use std::ops::{Add, Sub};

pub const DEFAULT_MENU_SIZE: f64 = 600.0;
pub const MARKER_ORBIT: f64 = 0.7; // label distance, relative to the menu radius
const RADIUS_DIVISOR: f64 = 3.0;
const DEAD_ZONE_DIVISOR: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Square overlay geometry. All derived lengths are whole pixels so the
/// disc, the dead zone and the hit test agree on the same boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub size: f64,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_SIZE)
    }
}

impl MenuLayout {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Center of the menu in overlay-local coordinates.
    pub fn center(&self) -> Point {
        let half = (self.size / 2.0).floor();
        Point::new(half, half)
    }

    pub fn radius(&self) -> f64 {
        (self.size / RADIUS_DIVISOR).floor()
    }

    pub fn dead_zone_radius(&self) -> f64 {
        (self.size / DEAD_ZONE_DIVISOR).floor()
    }

    /// Top-left corner of an overlay centered on `cursor`.
    pub fn origin_for(&self, cursor: Point) -> Point {
        cursor - self.center()
    }

    /// Where a sector's label sits, in overlay-local coordinates. Angles
    /// grow counter-clockwise while screen y grows downward.
    pub fn marker_position(&self, angle_deg: f64) -> Point {
        let orbit = self.radius() * MARKER_ORBIT;
        let rad = angle_deg.to_radians();
        let center = self.center();
        Point::new(center.x + orbit * rad.cos(), center.y - orbit * rad.sin())
    }
}
