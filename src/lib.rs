//! Tidal Love number k2 of spherically symmetric bodies.
//!
//! The Radau-Sterne equation for the tidal response `eta` is integrated
//! outward with a fixed-step midpoint scheme (Sterne 1939, as written by
//! Buhler 2016) over a tabulated radial density profile, and
//! `k2 = (3 - eta) / (2 + eta)` is taken at the surface.

pub mod error;
pub mod io;
pub mod love;
pub mod models;
pub mod profile;

pub use error::{IntegrationPoint, LoveError, Result};
pub use love::{integrate, lovek2, Shell};
pub use profile::Profile;
