/// Energy engine: net energy requirements, gross energy intake,
/// enteric methane and dry-matter intake for a single animal.
///
/// Follows the IPCC Tier 2 bioenergetic chain: NEm + NEg + NEl + NEp,
/// converted to gross energy through REM/REG, then Ym for methane.
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
