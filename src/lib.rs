//! Remote control for a music player running on another host.
//!
//! A [`player::Player`] is built on top of a [`remote::CommandExecutor`];
//! the executor runs the player's control tool over ssh and the player
//! turns its text output into typed values.

pub mod app;
pub mod player;
pub mod remote;
