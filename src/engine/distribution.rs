//! Maxwell-Boltzmann distribution factors.
//!
//! Three closed-form functions evaluated pointwise over a velocity domain
//! for a gas of molar mass `M` (kg/mol) at temperature `T` (K):
//!
//! ```text
//! pre(v) = 4π (M / (2π R T))^(3/2) · v²
//! exp(v) = exp(−M v² / (2 R T))
//! F(v)   = pre(v) · exp(v)
//! ```
//!
//! All three are pure and total over M > 0, T > 0; non-positive inputs
//! are rejected with `MbError::InvalidParameter` because the formulas
//! degenerate there (division by zero, fractional power of a negative
//! base).

use std::f64::consts::PI;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::domain::VelocityDomain;
use crate::error::{MbError, MbResult, ParameterField};

/// A gas at a fixed temperature: the (M, T) pair the engine evaluates.
///
/// Both fields are strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasSample {
    molar_mass_kg_per_mol: f64,
    temperature_k: f64,
}

impl GasSample {
    /// Create a sample from SI units (kg/mol, K).
    ///
    /// # Errors
    ///
    /// Returns `MbError::InvalidParameter` if either value is not
    /// strictly positive and finite.
    pub fn new(molar_mass_kg_per_mol: f64, temperature_k: f64) -> MbResult<Self> {
        check_parameters(molar_mass_kg_per_mol, temperature_k)?;
        Ok(Self {
            molar_mass_kg_per_mol,
            temperature_k,
        })
    }

    /// Create a sample from a molar mass in g/mol (the user-facing unit).
    ///
    /// # Errors
    ///
    /// Returns `MbError::InvalidParameter` if either value is not
    /// strictly positive and finite.
    pub fn from_g_per_mol(molar_mass_g_per_mol: f64, temperature_k: f64) -> MbResult<Self> {
        Self::new(molar_mass_g_per_mol / 1000.0, temperature_k)
    }

    /// Molar mass, kg/mol.
    #[must_use]
    pub const fn molar_mass_kg_per_mol(&self) -> f64 {
        self.molar_mass_kg_per_mol
    }

    /// Molar mass converted back to g/mol.
    #[must_use]
    pub fn molar_mass_g_per_mol(&self) -> f64 {
        self.molar_mass_kg_per_mol * 1000.0
    }

    /// Absolute temperature, K.
    #[must_use]
    pub const fn temperature_k(&self) -> f64 {
        self.temperature_k
    }
}

/// Validate an (M, T) pair. NaN fails the finiteness check.
fn check_parameters(molar_mass: f64, temperature: f64) -> MbResult<()> {
    if molar_mass <= 0.0 || !molar_mass.is_finite() {
        return Err(MbError::invalid_parameter(
            ParameterField::MolarMass,
            molar_mass,
        ));
    }
    if temperature <= 0.0 || !temperature.is_finite() {
        return Err(MbError::invalid_parameter(
            ParameterField::Temperature,
            temperature,
        ));
    }
    Ok(())
}

/// Validate the gas constant used for an evaluation.
fn check_gas_constant(gas_constant: f64) -> MbResult<()> {
    if gas_constant <= 0.0 || !gas_constant.is_finite() {
        return Err(MbError::config(format!(
            "Gas constant must be positive and finite, got {gas_constant}"
        )));
    }
    Ok(())
}

/// Pre-exponential factor `4π (M / (2π R T))^(3/2) · v²` per domain point.
///
/// # Errors
///
/// Returns `MbError::InvalidParameter` for M ≤ 0 or T ≤ 0, and
/// `MbError::Config` for a non-positive gas constant.
pub fn pre_exponential_factor(
    domain: &VelocityDomain,
    molar_mass: f64,
    temperature: f64,
    gas_constant: f64,
) -> MbResult<Vec<f64>> {
    check_parameters(molar_mass, temperature)?;
    check_gas_constant(gas_constant)?;

    let coeff = 4.0 * PI * (molar_mass / (2.0 * PI * gas_constant * temperature)).powf(1.5);
    Ok(domain.speeds().iter().map(|v| coeff * v * v).collect())
}

/// Boltzmann suppression factor `exp(−M v² / (2 R T))` per domain point.
///
/// Values lie in (0, 1] for v ≥ 0 and decrease strictly with v.
///
/// # Errors
///
/// Returns `MbError::InvalidParameter` for M ≤ 0 or T ≤ 0, and
/// `MbError::Config` for a non-positive gas constant.
pub fn exponential_factor(
    domain: &VelocityDomain,
    molar_mass: f64,
    temperature: f64,
    gas_constant: f64,
) -> MbResult<Vec<f64>> {
    check_parameters(molar_mass, temperature)?;
    check_gas_constant(gas_constant)?;

    let scale = -molar_mass / (2.0 * gas_constant * temperature);
    Ok(domain
        .speeds()
        .iter()
        .map(|v| (scale * v * v).exp())
        .collect())
}

/// Full speed density `F(v)`, the elementwise product of the two factors.
///
/// Non-negative everywhere, zero at v = 0, with a single interior maximum
/// (the most probable speed) for any valid (M, T).
///
/// # Errors
///
/// Returns `MbError::InvalidParameter` for M ≤ 0 or T ≤ 0, and
/// `MbError::Config` for a non-positive gas constant.
pub fn density(
    domain: &VelocityDomain,
    molar_mass: f64,
    temperature: f64,
    gas_constant: f64,
) -> MbResult<Vec<f64>> {
    check_parameters(molar_mass, temperature)?;
    check_gas_constant(gas_constant)?;

    let coeff = 4.0 * PI * (molar_mass / (2.0 * PI * gas_constant * temperature)).powf(1.5);
    let scale = -molar_mass / (2.0 * gas_constant * temperature);
    Ok(domain
        .speeds()
        .iter()
        .map(|v| coeff * v * v * (scale * v * v).exp())
        .collect())
}

/// All three factor arrays for one gas sample over a shared domain.
///
/// Derived and immutable; recomputed from scratch whenever the owning
/// scenario is rebuilt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionCurve {
    domain: Arc<VelocityDomain>,
    pre_exponential: Vec<f64>,
    exponential: Vec<f64>,
    density: Vec<f64>,
}

impl DistributionCurve {
    /// Evaluate all three factors for `sample` over `domain`.
    ///
    /// # Errors
    ///
    /// Returns `MbError::Config` for a non-positive gas constant. The
    /// sample itself is positive by construction.
    pub fn compute(
        domain: Arc<VelocityDomain>,
        sample: &GasSample,
        gas_constant: f64,
    ) -> MbResult<Self> {
        let pre_exponential = pre_exponential_factor(
            &domain,
            sample.molar_mass_kg_per_mol(),
            sample.temperature_k(),
            gas_constant,
        )?;
        let exponential = exponential_factor(
            &domain,
            sample.molar_mass_kg_per_mol(),
            sample.temperature_k(),
            gas_constant,
        )?;
        let density = pre_exponential
            .iter()
            .zip(&exponential)
            .map(|(pre, exp)| pre * exp)
            .collect();

        Ok(Self {
            domain,
            pre_exponential,
            exponential,
            density,
        })
    }

    /// The shared velocity domain the arrays are aligned to.
    #[must_use]
    pub fn domain(&self) -> &Arc<VelocityDomain> {
        &self.domain
    }

    /// Pre-exponential factor values, same length as the domain.
    #[must_use]
    pub fn pre_exponential(&self) -> &[f64] {
        &self.pre_exponential
    }

    /// Exponential factor values, same length as the domain.
    #[must_use]
    pub fn exponential(&self) -> &[f64] {
        &self.exponential
    }

    /// Density values `F(v)`, same length as the domain.
    #[must_use]
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Number of points in the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.density.len()
    }

    /// Check if the curve is empty (never true for a computed curve).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Index of the sampled density maximum.
    #[must_use]
    pub fn peak_index(&self) -> usize {
        self.density
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map_or(0, |(i, _)| i)
    }

    /// Speed at the sampled density maximum, m/s.
    #[must_use]
    pub fn peak_speed(&self) -> f64 {
        self.domain.speeds()[self.peak_index()]
    }
}
