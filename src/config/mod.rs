//! Configuration system with YAML schema and validation.
//!
//! Type-safe configuration structs with compile-time validation via serde
//! and runtime semantic validation. The fixed reference constants (gas
//! constant, velocity domain bounds, UI defaults) live here so they are
//! injected explicitly instead of read from globals.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::domain::{VelocityDomain, DEFAULT_SAMPLES, DEFAULT_V_MAX};
use crate::engine::GAS_CONSTANT;
use crate::error::{MbError, MbResult};

/// Top-level configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MbConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Ideal gas constant R, J/(mol·K).
    #[serde(default = "default_gas_constant")]
    pub gas_constant: f64,

    /// Velocity domain settings.
    #[validate(nested)]
    #[serde(default)]
    pub domain: DomainConfig,

    /// Default user-facing inputs.
    #[validate(nested)]
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_gas_constant() -> f64 {
    GAS_CONSTANT
}

impl MbConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> MbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> MbResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> MbConfigBuilder {
        MbConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    ///
    /// # Errors
    ///
    /// Returns `MbError::Config` when a constraint fails.
    pub fn validate_semantic(&self) -> MbResult<()> {
        if self.gas_constant <= 0.0 || !self.gas_constant.is_finite() {
            return Err(MbError::config(format!(
                "Gas constant must be positive, got {}",
                self.gas_constant
            )));
        }
        if self.domain.v_max <= 0.0 || !self.domain.v_max.is_finite() {
            return Err(MbError::config(format!(
                "Domain v_max must be positive, got {}",
                self.domain.v_max
            )));
        }
        if self.domain.samples < 2 {
            return Err(MbError::config(format!(
                "Domain needs at least 2 samples, got {}",
                self.domain.samples
            )));
        }
        if self.defaults.molar_mass_g_per_mol <= 0.0 {
            return Err(MbError::config("Default molar mass must be positive"));
        }
        if self.defaults.temperature_k <= 0.0 || self.defaults.comparison_temperature_k <= 0.0 {
            return Err(MbError::config("Default temperatures must be positive"));
        }
        Ok(())
    }

    /// Build the velocity domain described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `MbError::Config` for degenerate domain settings.
    pub fn velocity_domain(&self) -> MbResult<VelocityDomain> {
        VelocityDomain::new(self.domain.v_max, self.domain.samples)
    }
}

impl Default for MbConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            gas_constant: default_gas_constant(),
            domain: DomainConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct MbConfigBuilder {
    gas_constant: Option<f64>,
    v_max: Option<f64>,
    samples: Option<usize>,
}

impl MbConfigBuilder {
    /// Set the gas constant.
    #[must_use]
    pub const fn gas_constant(mut self, r: f64) -> Self {
        self.gas_constant = Some(r);
        self
    }

    /// Set the domain upper bound in m/s.
    #[must_use]
    pub const fn v_max(mut self, v_max: f64) -> Self {
        self.v_max = Some(v_max);
        self
    }

    /// Set the number of domain sample points.
    #[must_use]
    pub const fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> MbConfig {
        let mut config = MbConfig::default();

        if let Some(r) = self.gas_constant {
            config.gas_constant = r;
        }
        if let Some(v_max) = self.v_max {
            config.domain.v_max = v_max;
        }
        if let Some(samples) = self.samples {
            config.domain.samples = samples;
        }

        config
    }
}

/// Velocity domain settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    /// Upper speed bound, m/s.
    #[serde(default = "default_v_max")]
    pub v_max: f64,
    /// Number of sample points (endpoints included).
    #[validate(range(min = 2))]
    #[serde(default = "default_samples")]
    pub samples: usize,
}

const fn default_v_max() -> f64 {
    DEFAULT_V_MAX
}

const fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            v_max: default_v_max(),
            samples: default_samples(),
        }
    }
}

/// Default user-facing inputs (the original tool's widget defaults).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default molar mass, g/mol (CO₂).
    #[serde(default = "default_molar_mass")]
    pub molar_mass_g_per_mol: f64,
    /// Default temperature, K.
    #[serde(default = "default_temperature")]
    pub temperature_k: f64,
    /// Default second temperature for two-temperature comparisons, K.
    #[serde(default = "default_comparison_temperature")]
    pub comparison_temperature_k: f64,
}

const fn default_molar_mass() -> f64 {
    44.0
}

const fn default_temperature() -> f64 {
    288.0
}

const fn default_comparison_temperature() -> f64 {
    740.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            molar_mass_g_per_mol: default_molar_mass(),
            temperature_k: default_temperature(),
            comparison_temperature_k: default_comparison_temperature(),
        }
    }
}
