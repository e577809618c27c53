pub mod defaults;
pub mod params;
pub mod profile;
pub mod run;
pub mod sweep;
