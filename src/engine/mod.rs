//! Distribution engine.
//!
//! The numeric core of the crate:
//! - `domain`: uniform velocity sampling shared across all curves
//! - `distribution`: the closed-form Maxwell-Boltzmann factors
//!
//! All engine operations are pure functions over immutable inputs. They
//! hold no state and may be called concurrently without coordination.

pub mod distribution;
pub mod domain;

pub use distribution::{
    density, exponential_factor, pre_exponential_factor, DistributionCurve, GasSample,
};
pub use domain::VelocityDomain;

/// Ideal gas constant R, J/(mol·K).
///
/// Fixed for output compatibility; the engine and builder also accept R as
/// an explicit parameter so tests can substitute alternates.
pub const GAS_CONSTANT: f64 = 8.314;
