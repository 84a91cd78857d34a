/// Reproductive impact model: calving-rate and calving-interval gains from
/// a diet/supplement change, with a ten-year adoption-curve projection.
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
