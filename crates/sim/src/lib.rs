pub mod aggregate;
pub mod bench;
pub mod engine;
pub mod monte_carlo;
pub mod runner;
pub mod step;
pub mod transitions;
