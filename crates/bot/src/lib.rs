//! Autonomous solver for the room-clearing game.
//!
//! The bot drives a [`doom_core::GameState`] towards completion: every room
//! cleared, or proof that no further kill is possible.
//!
//! Modules are organized by responsibility:
//! - [`resolver`] finds the protectors that must die before a monster
//! - [`feasibility`] simulates a kill chain without touching the game
//! - [`execution`] commits a kill chain to the real player and room
//! - [`bot`] hosts [`GameBot`], the pass-until-stable convergence loop
pub mod bot;
pub mod error;
pub mod execution;
pub mod feasibility;
pub mod resolver;

pub use bot::GameBot;
pub use error::BotError;
pub use execution::kill_monster;
pub use feasibility::{Infeasible, KillPlan, assess, can_kill};
pub use resolver::protectors;
