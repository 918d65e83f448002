use nalgebra::DVector;

use crate::error::{LoveError, Result};
use crate::love::{self, Shell};

// ---------------------------------------------------------------------------
// Radial density profile
// ---------------------------------------------------------------------------

/// Validated radial density profile of a spherically symmetric body.
///
/// Radii are strictly positive, finite and strictly increasing; densities are
/// finite and non-negative; both hold the same number (>= 2) of samples.
#[derive(Debug, Clone)]
pub struct Profile {
    radius: DVector<f64>,
    density: DVector<f64>,
}

impl Profile {
    /// Build a profile, rejecting anything `lovek2` would refuse.
    pub fn new(radius: DVector<f64>, density: DVector<f64>) -> Result<Self> {
        validate(radius.as_slice(), density.as_slice())?;
        Ok(Self { radius, density })
    }

    pub fn from_slices(radius: &[f64], density: &[f64]) -> Result<Self> {
        Self::new(
            DVector::from_column_slice(radius),
            DVector::from_column_slice(density),
        )
    }

    pub fn radius(&self) -> &[f64] {
        self.radius.as_slice()
    }

    pub fn density(&self) -> &[f64] {
        self.density.as_slice()
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    /// Always `false`: a validated profile holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// Outermost sampled radius.
    pub fn surface_radius(&self) -> f64 {
        self.radius[self.radius.len() - 1]
    }

    /// Same shape with every radius multiplied by `factor` (> 0).
    pub fn scale_radius(&self, factor: f64) -> Result<Self> {
        Self::new(&self.radius * factor, self.density.clone())
    }

    /// Same shape with every density multiplied by `factor` (>= 0).
    pub fn scale_density(&self, factor: f64) -> Result<Self> {
        Self::new(self.radius.clone(), &self.density * factor)
    }

    /// Tidal Love number k2 of this profile.
    pub fn lovek2(&self) -> Result<f64> {
        love::lovek2(self.radius(), self.density())
    }

    /// Running state at every sample, innermost first.
    pub fn integrate(&self) -> Result<Vec<Shell>> {
        love::integrate(self.radius(), self.density())
    }
}

/// Check the input contract of the integrator without running it.
pub fn validate(radii: &[f64], densities: &[f64]) -> Result<()> {
    if radii.len() != densities.len() {
        return Err(LoveError::LengthMismatch {
            radii: radii.len(),
            densities: densities.len(),
        });
    }
    if radii.len() < 2 {
        return Err(LoveError::TooFewPoints { len: radii.len() });
    }

    for (index, &value) in radii.iter().enumerate() {
        if !value.is_finite() {
            return Err(LoveError::NonFiniteRadius { index, value });
        }
        if value <= 0.0 {
            return Err(LoveError::NonPositiveRadius { index, value });
        }
        if index > 0 && value <= radii[index - 1] {
            return Err(LoveError::NonIncreasingRadius {
                index,
                prev: radii[index - 1],
                value,
            });
        }
    }

    for (index, &value) in densities.iter().enumerate() {
        if !value.is_finite() {
            return Err(LoveError::NonFiniteDensity { index, value });
        }
        if value < 0.0 {
            return Err(LoveError::NegativeDensity { index, value });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
