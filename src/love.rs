use crate::error::{IntegrationPoint, LoveError, Result};
use crate::profile;

// ---------------------------------------------------------------------------
// Running state of the radial integration
// ---------------------------------------------------------------------------

/// Integration state at one sampled radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    pub radius: f64,       // same units as the input radii
    pub density: f64,      // local density at `radius`
    pub mass: f64,         // enclosed mass, in units of density * surface_radius^3
    pub mean_density: f64, // mass / radius^3
    pub eta: f64,          // tidal response, 0 at the centre
}

impl Shell {
    /// Innermost sample treated as a small sphere of uniform density.
    pub fn core(radius: f64, density: f64) -> Shell {
        let mass = density * radius.powi(3);
        Shell {
            radius,
            density,
            mass,
            mean_density: mass / radius.powi(3),
            eta: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Radau-Sterne equation
// ---------------------------------------------------------------------------

/// Slope d(eta)/dz of the Sterne (1939) response equation, Buhler (2016) eq. 2.
pub fn sterne_slope(z: f64, density: f64, mean_density: f64, eta: f64, step: usize) -> Result<f64> {
    let at = IntegrationPoint::Step(step);
    let ratio = checked_div(density, mean_density, at, "zero mean density")?;
    let numerator = 6.0 - 6.0 * ratio * (eta + 1.0) + eta - eta * eta;
    checked_div(numerator, z, at, "zero radius")
}

/// Love number from the surface value of eta.
pub fn love_number(eta: f64) -> Result<f64> {
    let at = IntegrationPoint::Surface;
    if !eta.is_finite() {
        return Err(domain_error(at, "non-finite surface eta"));
    }
    checked_div(3.0 - eta, 2.0 + eta, at, "surface eta equals -2")
}

// ---------------------------------------------------------------------------
// Midpoint (RK2) step
// ---------------------------------------------------------------------------

/// Advance from `shell` to the next sample at (`radius`, `density`).
///
/// Density is interpolated linearly to the midpoint; mass is accumulated with
/// the midpoint density over the inner half shell and the outer sample's
/// density over the outer half. Radii should be of order one; [`lovek2`]
/// feeds it radii divided by the surface radius.
pub fn midpoint_step(shell: &Shell, radius: f64, density: f64, step: usize) -> Result<Shell> {
    let at = IntegrationPoint::Step(step);
    let z = shell.radius;
    let h = radius - z;

    let s1 = sterne_slope(z, shell.density, shell.mean_density, shell.eta, step)?;

    let zhalf = z + 0.5 * h;
    let dhalf = shell.density + 0.5 * (density - shell.density);
    let mhalf = shell.mass + dhalf * (zhalf.powi(3) - z.powi(3));
    let rhalf = checked_div(mhalf, zhalf.powi(3), at, "zero midpoint radius")?;
    let ehalf = shell.eta + s1 * (zhalf - z);

    let s2 = sterne_slope(zhalf, dhalf, rhalf, ehalf, step)?;

    // Finite: |shell.eta| is below sqrt(f64::MAX) or s1 would have overflowed
    let eta = shell.eta + s2 * h;
    let mass = mhalf + density * (radius.powi(3) - zhalf.powi(3));

    Ok(Shell {
        radius,
        density,
        mass,
        mean_density: checked_div(mass, radius.powi(3), at, "zero radius")?,
        eta,
    })
}

// ---------------------------------------------------------------------------
// Full radial integration
// ---------------------------------------------------------------------------

/// Tidal Love number k2 of a body with the given radial density profile.
///
/// `radii` must be finite, strictly positive and strictly increasing, starting
/// near (not at) the centre. `densities` must be finite and non-negative.
/// Only the shape of the profile matters: scaling either sequence by a
/// positive constant leaves k2 unchanged.
pub fn lovek2(radii: &[f64], densities: &[f64]) -> Result<f64> {
    let surface = march(radii, densities, |_| {})?;
    let k2 = love_number(surface.eta)?;
    tracing::debug!(eta = surface.eta, k2, "integration finished");
    Ok(k2)
}

/// Same integration as [`lovek2`], returning the state at every sample.
///
/// Radii are reported in input units; masses in units of
/// `density * surface_radius^3`.
pub fn integrate(radii: &[f64], densities: &[f64]) -> Result<Vec<Shell>> {
    let mut shells = Vec::with_capacity(radii.len());
    march(radii, densities, |s| shells.push(*s))?;
    Ok(shells)
}

fn march(radii: &[f64], densities: &[f64], mut visit: impl FnMut(&Shell)) -> Result<Shell> {
    profile::validate(radii, densities)?;
    let surface = radii[radii.len() - 1];
    tracing::debug!(points = radii.len(), surface, "integrating Sterne equation");

    // March in r / R so that r^3 stays representable
    let rescale = |s: &Shell| Shell { radius: s.radius * surface, ..*s };

    let mut shell = Shell::core(radii[0] / surface, densities[0]);
    visit(&rescale(&shell));

    for (k, (&z, &d)) in radii.iter().zip(densities).enumerate().skip(1) {
        shell = midpoint_step(&shell, z / surface, d, k - 1)?;
        visit(&rescale(&shell));
    }

    Ok(rescale(&shell))
}

// ---------------------------------------------------------------------------
// Guarded arithmetic
// ---------------------------------------------------------------------------

fn checked_div(num: f64, den: f64, at: IntegrationPoint, quantity: &'static str) -> Result<f64> {
    if den == 0.0 {
        return Err(domain_error(at, quantity));
    }
    let q = num / den;
    if !q.is_finite() {
        return Err(domain_error(at, "non-finite quotient"));
    }
    Ok(q)
}

fn domain_error(at: IntegrationPoint, quantity: &'static str) -> LoveError {
    tracing::warn!(%at, quantity, "numeric domain error");
    LoveError::NumericDomain { at, quantity }
}

/// |calc - expected| / |expected + eps|
pub fn relative_error(calc: f64, expected: f64) -> f64 {
    (calc - expected).abs() / (expected + f64::EPSILON).abs()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
