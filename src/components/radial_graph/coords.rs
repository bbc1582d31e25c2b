//! Polar/Cartesian conversion around the center node and screen/canvas
//! conversion for the current zoom and pan.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A point in canvas or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A polar offset from the origin: `angle` in degrees, `radius` in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
	pub angle: f64,
	pub radius: f64,
}

impl Polar {
	/// Rounds both components to whole units. An angle that rounds up to 360
	/// wraps back to 0.
	pub fn rounded(self) -> Self {
		Self {
			angle: normalize_angle(self.angle.round()),
			radius: self.radius.round(),
		}
	}
}

/// Maps any angle in degrees into `[0, 360)`. Non-finite input maps to 0.
pub fn normalize_angle(angle: f64) -> f64 {
	if !angle.is_finite() {
		return 0.0;
	}
	let a = angle.rem_euclid(360.0);
	// rem_euclid can return 360.0 for tiny negative inputs
	if a >= 360.0 { 0.0 } else { a }
}

/// Clamps a radius to `>= 0`. Non-finite input maps to 0.
pub fn clamp_radius(radius: f64) -> f64 {
	if radius.is_finite() {
		radius.max(0.0)
	} else {
		0.0
	}
}

pub fn to_cartesian(origin: Point, angle_deg: f64, radius: f64) -> Point {
	let rad = angle_deg * PI / 180.0;
	Point {
		x: origin.x + radius * rad.cos(),
		y: origin.y + radius * rad.sin(),
	}
}

/// Inverse of [`to_cartesian`]. The angle is always in `[0, 360)`; values are
/// not rounded here, see [`Polar::rounded`].
pub fn to_polar(origin: Point, p: Point) -> Polar {
	let (dx, dy) = (p.x - origin.x, p.y - origin.y);
	let mut angle = dy.atan2(dx) * 180.0 / PI;
	if angle < 0.0 {
		angle += 360.0;
	}
	Polar {
		angle: normalize_angle(angle),
		radius: (dx * dx + dy * dy).sqrt(),
	}
}

/// Positions of `count` satellites spaced evenly on a circle of radius `orbit`
/// around `center`, the first one at the top.
pub fn satellite_positions(center: Point, count: usize, orbit: f64) -> Vec<Point> {
	if count == 0 {
		return Vec::new();
	}
	let step = 360.0 / count as f64;
	(0..count)
		.map(|i| to_cartesian(center, -90.0 + step * i as f64, orbit))
		.collect()
}

/// Screen transform applied to the canvas: translate by `(x, y)` then scale by `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Undoes zoom and pan so pointer positions land in canvas units.
	pub fn screen_to_canvas(&self, p: Point) -> Point {
		Point {
			x: (p.x - self.x) / self.k,
			y: (p.y - self.y) / self.k,
		}
	}

	pub fn canvas_to_screen(&self, p: Point) -> Point {
		Point {
			x: p.x * self.k + self.x,
			y: p.y * self.k + self.y,
		}
	}

	/// Zooms by `factor` keeping the canvas point under `anchor` fixed.
	pub fn zoom_at(&mut self, anchor: Point, factor: f64, min: f64, max: f64) {
		let new_k = (self.k * factor).clamp(min, max);
		let ratio = new_k / self.k;
		self.x = anchor.x - (anchor.x - self.x) * ratio;
		self.y = anchor.y - (anchor.y - self.y) * ratio;
		self.k = new_k;
	}
}
