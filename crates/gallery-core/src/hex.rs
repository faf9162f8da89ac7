//! Flat-top hex grid math in axial and cube coordinates.
//!
//! Pixel space has +x to the right and +y downwards, matching canvas
//! conventions. All conversions take an explicit `size` (center to corner
//! distance) so the same functions serve both unit-size topology work and
//! real layout.

use glam::Vec2;

const SQRT3: f32 = 1.732_050_8;

/// Integer axial hex address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ORIGIN: Axial = Axial { q: 0, r: 0 };

    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[inline]
    pub fn to_cube(self) -> Cube {
        axial_to_cube(self)
    }

    #[inline]
    pub fn to_pixel(self, size: f32) -> Vec2 {
        axial_to_pixel(self.q as f32, self.r as f32, size)
    }
}

impl std::ops::Add for Axial {
    type Output = Axial;
    fn add(self, rhs: Axial) -> Axial {
        Axial::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl std::ops::Sub for Axial {
    type Output = Axial;
    fn sub(self, rhs: Axial) -> Axial {
        Axial::new(self.q - rhs.q, self.r - rhs.r)
    }
}

/// Fractional axial coordinate, as produced by [`pixel_to_axial`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FractionalAxial {
    pub q: f32,
    pub r: f32,
}

/// Integer cube coordinate. Invariant: `x + y + z == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[inline]
pub fn axial_to_cube(a: Axial) -> Cube {
    Cube {
        x: a.q,
        y: -a.q - a.r,
        z: a.r,
    }
}

#[inline]
pub fn cube_to_axial(c: Cube) -> Axial {
    Axial::new(c.x, c.z)
}

/// Center of hex `(q, r)` in pixels for a flat-top layout.
#[inline]
pub fn axial_to_pixel(q: f32, r: f32, size: f32) -> Vec2 {
    Vec2::new(size * 1.5 * q, size * (SQRT3 * 0.5 * q + SQRT3 * r))
}

/// Exact inverse of [`axial_to_pixel`].
#[inline]
pub fn pixel_to_axial(p: Vec2, size: f32) -> FractionalAxial {
    let q = (2.0 / 3.0) * (p.x / size);
    let r = (-1.0 / 3.0) * (p.x / size) + (1.0 / SQRT3) * (p.y / size);
    FractionalAxial { q, r }
}

// Half-up rounding; `f32::round` sends -0.5 to -1 which breaks tie symmetry.
#[inline]
fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}

/// Round a fractional cube coordinate to the nearest hex.
///
/// Each component is rounded on its own, then the one with the largest
/// rounding error is rebuilt from the other two so `x + y + z == 0` holds.
pub fn cube_round(x: f32, y: f32, z: f32) -> Cube {
    let mut rx = round_half_up(x);
    let mut ry = round_half_up(y);
    let mut rz = round_half_up(z);

    let x_diff = (rx - x).abs();
    let y_diff = (ry - y).abs();
    let z_diff = (rz - z).abs();

    if x_diff > y_diff && x_diff > z_diff {
        rx = -ry - rz;
    } else if y_diff > z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }
    Cube {
        x: rx as i32,
        y: ry as i32,
        z: rz as i32,
    }
}

#[inline]
pub fn axial_round(a: FractionalAxial) -> Axial {
    cube_to_axial(cube_round(a.q, -a.q - a.r, a.r))
}

/// Hex at pixel `p`, i.e. `axial_round(pixel_to_axial(p, size))`.
#[inline]
pub fn hex_at_pixel(p: Vec2, size: f32) -> Axial {
    axial_round(pixel_to_axial(p, size))
}

pub fn hex_distance(a: Axial, b: Axial) -> i32 {
    let ac = axial_to_cube(a);
    let bc = axial_to_cube(b);
    ((ac.x - bc.x).abs() + (ac.y - bc.y).abs() + (ac.z - bc.z).abs()) / 2
}

/// Corners of a flat-top hex, starting at angle 0 and stepping by 60 degrees.
pub fn hex_corners(center: Vec2, size: f32) -> [Vec2; 6] {
    let mut corners = [Vec2::ZERO; 6];
    for (i, c) in corners.iter_mut().enumerate() {
        let angle = (60.0 * i as f32).to_radians();
        *c = center + Vec2::new(size * angle.cos(), size * angle.sin());
    }
    corners
}
