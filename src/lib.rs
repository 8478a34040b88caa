//! # maxboltz
//!
//! Maxwell-Boltzmann speed distribution engine for ideal gases.
//!
//! Evaluates the closed-form distribution factors over a fixed velocity
//! domain and assembles labeled curve sets for side-by-side comparison of
//! gases and temperatures. The crate is the numeric core only: a
//! presentation layer (plotting, widgets) is expected to call in with
//! molar mass / temperature inputs and render the returned curves.
//!
//! ## Example
//!
//! ```rust
//! use maxboltz::prelude::*;
//!
//! let builder = ScenarioBuilder::default();
//! let set = builder.build(&ScenarioMode::SingleGas {
//!     molar_mass_g_per_mol: 44.0,
//!     temperature_k: 288.0,
//! })?;
//! assert_eq!(set.len(), 1);
//! # Ok::<(), maxboltz::MbError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,  // Closed-form factors written as in the literature
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod scenarios;
pub mod visualization;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{MbConfig, MbConfigBuilder};
    pub use crate::engine::distribution::{
        density, exponential_factor, pre_exponential_factor, DistributionCurve, GasSample,
    };
    pub use crate::engine::domain::VelocityDomain;
    pub use crate::engine::GAS_CONSTANT;
    pub use crate::error::{MbError, MbResult, ParameterField};
    pub use crate::scenarios::{Scenario, ScenarioBuilder, ScenarioMode, ScenarioSet};
}

/// Re-export for public API
pub use error::{MbError, MbResult};
