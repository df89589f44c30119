pub mod acceptance;
pub mod config;
pub mod reports;
pub mod runner;
pub mod seeds;

pub use acceptance::validate_convergence;
pub use config::RunConfig;
pub use runner::{BatchRunner, Execution, SeedRun};
pub use seeds::resolve_seed_inputs;
