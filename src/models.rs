use std::f64::consts::PI;

use nalgebra::DVector;

use crate::error::Result;
use crate::profile::Profile;

// ---------------------------------------------------------------------------
// Physical constants (Jupiter-like n=1 polytrope)
// ---------------------------------------------------------------------------

pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11; // m^3/(kg s^2)
pub const EARTH_MASS: f64 = 5.972_2e24;               // kg
pub const JUPITER_MASS: f64 = 317.8 * EARTH_MASS;     // kg
pub const JUPITER_RADIUS: f64 = 71_492e3;             // m, equatorial

/// k2 of a homogeneous incompressible sphere.
pub const UNIFORM_K2: f64 = 1.5;

/// k2 of an n=1 polytrope: 15/pi^2 - 1.
pub fn polytrope_n1_k2() -> f64 {
    15.0 / (PI * PI) - 1.0
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// `n` equally spaced radii from `1/n` to 1; the centre itself is excluded.
pub fn normalized_radii(n: usize) -> DVector<f64> {
    let start = 1.0 / n as f64;
    DVector::from_fn(n, |i, _| {
        if i + 1 == n {
            1.0
        } else {
            start + (1.0 - start) * i as f64 / (n as f64 - 1.0)
        }
    })
}

// ---------------------------------------------------------------------------
// Analytic profiles
// ---------------------------------------------------------------------------

/// Uniform-density sphere of unit radius and unit density.
pub fn uniform(n: usize) -> Result<Profile> {
    Profile::new(normalized_radii(n), DVector::from_element(n, 1.0))
}

/// n=1 polytrope with Jupiter's mass, in SI units.
///
/// With P = K rho^2 and K = 2 G R^2 / pi, the density is
/// `rho_c sin(a r) / (a r)` with `a = sqrt(2 pi G / K) = pi / R`, and the
/// central density is `pi^2 / 3` times the mean density.
pub fn polytrope_n1(n: usize) -> Result<Profile> {
    let g = GRAVITATIONAL_CONSTANT;
    let k = 2.0 * g / PI * JUPITER_RADIUS.powi(2);
    let a = (2.0 * PI * g / k).sqrt();
    let radius = PI / a;

    let rho_avg = 3.0 * JUPITER_MASS / (4.0 * PI * radius.powi(3));
    let rho_c = (PI * PI / 3.0) * rho_avg;

    let r = normalized_radii(n) * radius;
    let mut rho = r.map(|r| (rho_c * (a * r).sin() / (a * r)).max(0.0));
    // sin(pi) can land a hair below zero
    if n > 0 {
        rho[n - 1] = 0.0;
    }

    Profile::new(r, rho)
}

// ---------------------------------------------------------------------------
// Validation cases
// ---------------------------------------------------------------------------

/// A profile paired with its closed-form Love number.
#[derive(Debug, Clone)]
pub struct ValidationCase {
    pub name: String,
    pub profile: Profile,
    pub expected: f64,
}

/// Both analytic cases sampled at `n` points.
pub fn cases(n: usize) -> Result<Vec<ValidationCase>> {
    Ok(vec![
        ValidationCase {
            name: "Uniform density".into(),
            profile: uniform(n)?,
            expected: UNIFORM_K2,
        },
        ValidationCase {
            name: "n=1 polytrope".into(),
            profile: polytrope_n1(n)?,
            expected: polytrope_n1_k2(),
        },
    ])
}

// ---------------------------------------------------------------------------
// Validation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub points: usize, // samples per profile
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { points: 2048 }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_span_unit_interval() {
        let r = normalized_radii(4);
        assert!((r[0] - 0.25).abs() < 1e-15);
        assert!((r[1] - 0.5).abs() < 1e-15);
        assert_eq!(r[3], 1.0);
    }

    #[test]
    fn polytrope_reproduces_jupiter_radius() {
        let p = polytrope_n1(2048).unwrap();
        assert!((p.surface_radius() - JUPITER_RADIUS).abs() / JUPITER_RADIUS < 1e-12);
        assert_eq!(p.density()[p.len() - 1], 0.0);
        assert!(p.density().iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn polytrope_central_to_mean_density() {
        let p = polytrope_n1(4096).unwrap();
        let rho_avg = 3.0 * JUPITER_MASS / (4.0 * PI * p.surface_radius().powi(3));
        let ratio = p.density()[0] / rho_avg;
        assert!((ratio - PI * PI / 3.0).abs() < 1e-3, "rho_c/rho_avg = {}", ratio);
    }

    #[test]
    fn expected_polytrope_k2() {
        assert!((polytrope_n1_k2() - 0.519_817_8).abs() < 1e-6);
    }

    #[test]
    fn cases_are_well_posed() {
        let cases = cases(ValidationConfig::default().points).unwrap();
        assert_eq!(cases.len(), 2);
        for c in &cases {
            assert!(c.profile.lovek2().is_ok(), "{} failed", c.name);
        }
    }

    #[test]
    fn too_few_points_is_rejected() {
        assert!(uniform(1).unwrap_err().is_invalid_input());
    }
}
