//! Simulation core of a terminal arcade shooter.
//!
//! The [`world::World`] owns every entity, the character grid and the session
//! counters. A driver calls [`world::World::tick`] then [`world::World::draw`]
//! once per frame and prints the returned text.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod frame_buffer;
pub mod globals;
pub mod input;
pub mod world;
