//! Implements the `/gift` command for transferring coins.

pub mod run;

pub use run::register;
