//! Persistence boundary: run results, coin balances, leaderboard.

#![allow(unused_imports)]

pub mod memory;
pub mod types;

pub use memory::*;
pub use types::*;
