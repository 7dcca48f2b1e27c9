// Library entry so integration tests and external tools can reference internal modules.
// The binary (`main.rs`) wires these together.
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod health;
pub mod interactions;
pub mod ledger;
pub mod model;
pub mod services;
pub mod ui;
pub mod util;

// Convenient re-exports for frequently used types.
pub use model::AppState;
