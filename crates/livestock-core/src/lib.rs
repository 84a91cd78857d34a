//! livestock-core: bioenergetic greenhouse-gas model for cattle and buffalo.
//!
//! Four layered components, each a module with the same layout
//! (`constants`, `params`, `processes`, `outputs`, `run`):
//!
//! - [`energy`]: net/gross energy requirements, enteric methane, feed intake
//! - [`reproduction`]: calving-rate and calving-interval projections
//! - [`emissions`]: enteric + manure CH4 + manure N2O + feed production totals
//! - [`buffalo`]: buffalo species profile and buffalo-versus-cattle comparison
//!
//! Every entry point is a pure function over validated parameters.
pub mod animal;
pub mod buffalo;
pub mod conversion;
pub mod emissions;
pub mod energy;
pub mod error;
pub mod reproduction;
pub mod traits;

pub use animal::{AnimalCategory, AnimalType, DietInfo, DietType};
pub use buffalo::compare::compare_buffalo_to_cattle;
pub use buffalo::run::calculate_buffalo_metrics;
pub use emissions::run::calculate_total_emissions;
pub use energy::run::calculate_animal_energy;
pub use error::ModelError;
pub use reproduction::run::calculate_reproductive_impact;
