// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod admin;
pub mod blackjack;
pub mod coinflip;
pub mod economy;
pub mod games;
pub mod help;
pub mod mines;
pub mod roulette;
pub mod slots;
