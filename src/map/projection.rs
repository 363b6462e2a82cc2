//! Screen projections for the flat map and the globe.
//!
//! Geographic math is done in f64; screen coordinates are f32 pixels with y
//! pointing down, as egui uses them.

use bevy::math::Vec2;

use crate::types::{DEG_TO_RAD, EARTH_RADIUS_KM, LatLng, RAD_TO_DEG};

/// Screen rectangle a projection draws into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.y >= self.min.y && point.x <= max.x && point.y <= max.y
    }
}

/// Plate carrée: longitude maps linearly to x, latitude to y.
pub fn equirect_project(position: LatLng, viewport: Viewport) -> Vec2 {
    let x = (position.lng + 180.0) / 360.0;
    let y = (90.0 - position.lat) / 180.0;
    viewport.min + Vec2::new(x as f32, y as f32) * viewport.size
}

/// Inverse of [`equirect_project`]; `None` outside the viewport.
pub fn equirect_unproject(point: Vec2, viewport: Viewport) -> Option<LatLng> {
    if !viewport.contains(point) || viewport.size.x <= 0.0 || viewport.size.y <= 0.0 {
        return None;
    }
    let rel = (point - viewport.min) / viewport.size;
    let lng = f64::from(rel.x) * 360.0 - 180.0;
    let lat = 90.0 - f64::from(rel.y) * 180.0;
    Some(LatLng::new(lat, lng))
}

/// Orthographic globe view centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Globe {
    pub center: LatLng,
    /// Screen position of the globe center.
    pub origin: Vec2,
    /// Globe radius in pixels.
    pub radius: f32,
}

impl Globe {
    /// Project onto the screen; `None` for points on the far side.
    pub fn project(&self, position: LatLng) -> Option<Vec2> {
        let (phi, lambda) = (position.lat * DEG_TO_RAD, position.lng * DEG_TO_RAD);
        let (phi0, lambda0) = (self.center.lat * DEG_TO_RAD, self.center.lng * DEG_TO_RAD);
        let d_lambda = lambda - lambda0;

        let cos_c = phi0.sin() * phi.sin() + phi0.cos() * phi.cos() * d_lambda.cos();
        if cos_c < 0.0 {
            return None;
        }

        let r = f64::from(self.radius);
        let x = r * phi.cos() * d_lambda.sin();
        let y = r * (phi0.cos() * phi.sin() - phi0.sin() * phi.cos() * d_lambda.cos());
        Some(self.origin + Vec2::new(x as f32, -y as f32))
    }

    /// Screen point back to a position; `None` off the disc.
    pub fn unproject(&self, point: Vec2) -> Option<LatLng> {
        let offset = point - self.origin;
        let x = f64::from(offset.x);
        let y = -f64::from(offset.y);
        let r = f64::from(self.radius);
        let rho = (x * x + y * y).sqrt();
        if r <= 0.0 || rho > r {
            return None;
        }
        if rho < f64::EPSILON {
            return Some(self.center);
        }

        let (phi0, lambda0) = (self.center.lat * DEG_TO_RAD, self.center.lng * DEG_TO_RAD);
        let c = (rho / r).asin();
        let (sin_c, cos_c) = c.sin_cos();

        let phi = (cos_c * phi0.sin() + y * sin_c * phi0.cos() / rho).clamp(-1.0, 1.0).asin();
        let lambda = lambda0
            + (x * sin_c).atan2(rho * cos_c * phi0.cos() - y * sin_c * phi0.sin());

        Some(LatLng::new(phi * RAD_TO_DEG, lambda * RAD_TO_DEG).wrapped())
    }
}

/// Point reached travelling `distance_km` from `start` on initial `bearing_deg`.
pub fn destination(start: LatLng, bearing_deg: f64, distance_km: f64) -> LatLng {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg * DEG_TO_RAD;
    let phi1 = start.lat * DEG_TO_RAD;
    let lambda1 = start.lng * DEG_TO_RAD;

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    LatLng::new(phi2 * RAD_TO_DEG, lambda2 * RAD_TO_DEG).wrapped()
}

/// `segments` points on the ground circle of `radius_km` around `center`.
pub fn ground_circle(center: LatLng, radius_km: f64, segments: usize) -> Vec<LatLng> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let bearing = 360.0 * i as f64 / segments as f64;
            destination(center, bearing, radius_km)
        })
        .collect()
}
