//! Scenario assembly for side-by-side curve comparison.
//!
//! Translates raw user-facing inputs (molar masses in g/mol, temperatures
//! in K, a comparison mode) into one or two labeled `DistributionCurve`s
//! over a shared velocity domain. Three modes are supported:
//!
//! - single gas, single temperature
//! - single gas, two temperatures (overlay labeled by temperature)
//! - two gases, one temperature (overlay labeled by molar mass)
//!
//! The builder performs no caching: every build recomputes from the
//! current inputs. A scenario either fully succeeds or fails as a whole;
//! the first invalid (M, T) pair aborts the build with an error naming
//! the pair's slot and the offending field.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::MbConfig;
use crate::engine::distribution::{DistributionCurve, GasSample};
use crate::engine::domain::VelocityDomain;
use crate::error::MbResult;

/// Which comparison the presentation layer requested.
///
/// Replaces the original tool's string-valued page selector with a tagged
/// variant, decoupled from any widget library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScenarioMode {
    /// One gas at one temperature: a single curve.
    SingleGas {
        /// Molar mass, g/mol.
        molar_mass_g_per_mol: f64,
        /// Temperature, K.
        temperature_k: f64,
    },
    /// One gas at two temperatures, overlaid.
    TwoTemperatures {
        /// Shared molar mass, g/mol.
        molar_mass_g_per_mol: f64,
        /// The two temperatures to compare, K.
        temperatures_k: [f64; 2],
    },
    /// Two gases at one temperature, overlaid.
    TwoGases {
        /// The two molar masses to compare, g/mol.
        molar_masses_g_per_mol: [f64; 2],
        /// Shared temperature, K.
        temperature_k: f64,
    },
}

impl ScenarioMode {
    /// The (molar mass g/mol, temperature K) pairs in declaration order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        match self {
            Self::SingleGas {
                molar_mass_g_per_mol,
                temperature_k,
            } => vec![(*molar_mass_g_per_mol, *temperature_k)],
            Self::TwoTemperatures {
                molar_mass_g_per_mol,
                temperatures_k,
            } => temperatures_k
                .iter()
                .map(|t| (*molar_mass_g_per_mol, *t))
                .collect(),
            Self::TwoGases {
                molar_masses_g_per_mol,
                temperature_k,
            } => molar_masses_g_per_mol
                .iter()
                .map(|m| (*m, *temperature_k))
                .collect(),
        }
    }

    /// Number of curves this mode produces.
    #[must_use]
    pub const fn scenario_count(&self) -> usize {
        match self {
            Self::SingleGas { .. } => 1,
            Self::TwoTemperatures { .. } | Self::TwoGases { .. } => 2,
        }
    }
}

/// One evaluated comparison slot: the sample, its curves, and a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// The validated (M, T) pair.
    pub sample: GasSample,
    /// The three factor arrays over the shared domain.
    pub curve: DistributionCurve,
    /// Human-readable label, e.g. `"44 g/mol at 288 K"`.
    pub label: String,
}

/// Ordered result of one build: 1 or 2 scenarios over a shared domain.
///
/// Constructed fresh per build; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    domain: Arc<VelocityDomain>,
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// The velocity domain all curves are aligned to.
    #[must_use]
    pub fn domain(&self) -> &Arc<VelocityDomain> {
        &self.domain
    }

    /// Scenarios in the order their pairs were specified.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Scenario at a slot, if present.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Scenario> {
        self.scenarios.get(slot)
    }

    /// Number of scenarios (1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check if the set is empty (never true for a built set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Iterate over the scenarios in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

/// Builds scenario sets from comparison modes.
///
/// Holds the shared velocity domain and the gas constant; both are
/// injected rather than read from globals so tests can substitute
/// alternates.
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    domain: Arc<VelocityDomain>,
    gas_constant: f64,
}

impl ScenarioBuilder {
    /// Create a builder over an explicit domain and gas constant.
    #[must_use]
    pub fn new(domain: Arc<VelocityDomain>, gas_constant: f64) -> Self {
        Self {
            domain,
            gas_constant,
        }
    }

    /// Create a builder from configuration.
    ///
    /// # Errors
    ///
    /// Returns `MbError::Config` if the configured domain or gas
    /// constant is degenerate.
    pub fn from_config(config: &MbConfig) -> MbResult<Self> {
        config.validate_semantic()?;
        let domain = Arc::new(config.velocity_domain()?);
        Ok(Self {
            domain,
            gas_constant: config.gas_constant,
        })
    }

    /// The shared velocity domain.
    #[must_use]
    pub fn domain(&self) -> &Arc<VelocityDomain> {
        &self.domain
    }

    /// The gas constant in use, J/(mol·K).
    #[must_use]
    pub const fn gas_constant(&self) -> f64 {
        self.gas_constant
    }

    /// Build the scenario set for a comparison mode.
    ///
    /// Pairs are evaluated in declaration order; curve order in the
    /// result matches input order. No partial sets: the first invalid
    /// pair fails the whole build.
    ///
    /// # Errors
    ///
    /// Returns `MbError::InvalidParameter` naming the slot and field of
    /// the first rejected pair, or `MbError::Config` for a bad gas
    /// constant.
    pub fn build(&self, mode: &ScenarioMode) -> MbResult<ScenarioSet> {
        let pairs = mode.pairs();
        let mut scenarios = Vec::with_capacity(pairs.len());

        for (slot, (molar_mass_g, temperature_k)) in pairs.into_iter().enumerate() {
            let sample = GasSample::from_g_per_mol(molar_mass_g, temperature_k)
                .map_err(|e| e.with_slot(slot))?;
            let curve =
                DistributionCurve::compute(Arc::clone(&self.domain), &sample, self.gas_constant)
                    .map_err(|e| e.with_slot(slot))?;

            scenarios.push(Scenario {
                sample,
                curve,
                // Label from the raw g/mol input to avoid float noise
                // from the round trip through kg/mol.
                label: format!("{molar_mass_g} g/mol at {temperature_k} K"),
            });
        }

        Ok(ScenarioSet {
            domain: Arc::clone(&self.domain),
            scenarios,
        })
    }
}

impl Default for ScenarioBuilder {
    /// Builder over the fixed reference domain and R = 8.314 J/(mol·K).
    fn default() -> Self {
        Self {
            domain: Arc::new(VelocityDomain::default()),
            gas_constant: crate::engine::GAS_CONSTANT,
        }
    }
}
