pub mod priority;
pub mod proximity;
pub mod richness;
