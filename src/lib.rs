//! Decision Value Simulation Library
//!
//! Monte Carlo tools for reasoning about decisions under uncertainty:
//! how much a decision-maker should pay to learn an outcome before acting,
//! and what an uncertain business case looks like as a distribution.
//!
//! ## Modules
//!
//! - `percentile`: normal / log-normal distributions fitted to two percentiles
//! - `profit`: annual net income model with Monte Carlo loss statistics
//! - `voi`: value-of-information simulation over willingness-to-pay agents
//! - `stats`: mean, quantiles, loss probability
//! - `histogram`: density histograms rendered as text
//! - `logging`: tracing subscriber for the binaries
//!
//! ## Usage
//!
//! ```bash
//! # Fit distributions to 90% intervals and check them empirically
//! cargo run --bin percentiles --release
//!
//! # Profit distribution of the shop model
//! cargo run --bin profit --release
//!
//! # Best willingness-to-pay vs expected opportunity loss
//! cargo run --bin voi --release
//! ```

pub mod error;
pub mod histogram;
pub mod logging;
pub mod percentile;
pub mod profit;
pub mod stats;
pub mod voi;

pub use error::{Error, Result};
