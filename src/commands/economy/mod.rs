//! This module contains all commands related to player balances.

pub mod balance;
pub mod gift;

pub use balance::run_slash as bal_slash;
pub use gift::run::run_slash as gift_slash;
