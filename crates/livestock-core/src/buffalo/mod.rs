/// Buffalo species profile layer and buffalo-versus-cattle comparison.
///
/// Wraps the energy, reproduction and emissions components with buffalo
/// defaults and adjustment multipliers, then adds milk/meat/draft metrics.
pub mod compare;
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
