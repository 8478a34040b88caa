//! Velocity domain sampling.
//!
//! A `VelocityDomain` is the ordered, uniform sampling of speeds over
//! which every distribution curve is evaluated. It is immutable once
//! constructed and shared read-only (via `Arc`) by all curves in a
//! scenario set, so comparisons are always over identical abscissae.

use serde::{Deserialize, Serialize};

use crate::error::{MbError, MbResult};

/// Default upper speed bound, m/s.
pub const DEFAULT_V_MAX: f64 = 4000.0;

/// Default number of sample points (endpoints included).
pub const DEFAULT_SAMPLES: usize = 500;

/// Uniform sampling of speeds over `[0, v_max]`, endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityDomain {
    speeds: Vec<f64>,
    v_max: f64,
}

impl VelocityDomain {
    /// Create a domain of `samples` evenly spaced points over `[0, v_max]`.
    ///
    /// Both endpoints are included, so spacing is `v_max / (samples - 1)`.
    ///
    /// # Errors
    ///
    /// Returns `MbError::Config` if `v_max` is not a positive finite
    /// number or `samples < 2`.
    pub fn new(v_max: f64, samples: usize) -> MbResult<Self> {
        if !v_max.is_finite() || v_max <= 0.0 {
            return Err(MbError::config(format!(
                "Domain v_max must be positive and finite, got {v_max}"
            )));
        }
        if samples < 2 {
            return Err(MbError::config(format!(
                "Domain needs at least 2 samples, got {samples}"
            )));
        }

        let step = v_max / (samples - 1) as f64;
        let speeds = (0..samples).map(|i| i as f64 * step).collect();

        Ok(Self { speeds, v_max })
    }

    /// Sampled speeds in ascending order, m/s.
    #[must_use]
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Upper bound of the domain, m/s.
    #[must_use]
    pub const fn v_max(&self) -> f64 {
        self.v_max
    }

    /// Distance between consecutive samples, m/s.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.v_max / (self.speeds.len() - 1) as f64
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    /// Check if the domain is empty (never true for a constructed domain).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

impl Default for VelocityDomain {
    /// The fixed reference domain: 500 points over [0, 4000] m/s.
    fn default() -> Self {
        // Defaults are valid constants; construction cannot fail.
        let step = DEFAULT_V_MAX / (DEFAULT_SAMPLES - 1) as f64;
        let speeds = (0..DEFAULT_SAMPLES).map(|i| i as f64 * step).collect();
        Self {
            speeds,
            v_max: DEFAULT_V_MAX,
        }
    }
}
