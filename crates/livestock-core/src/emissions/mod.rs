/// Emissions aggregator: enteric methane plus manure CH4, manure N2O and
/// feed-production emissions, totalled in kg CO2e per year.
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
