pub mod logic;
pub mod run;

pub use run::{register, run_slash};
