//! Platform abstraction layer
//!
//! Turns terminal lines into per-tick simulation input. Picking and cursor
//! handling belong to whatever front end drives the kitchen; here the player
//! names the button they look at and press.

pub mod input;

pub use input::{Command, InputQueue, UnknownCommand, parse_line};
