//! A terminal rendition of the flap-through-the-pipes arcade game.
//!
//! The simulation (`compute`) is a pure function of state, input and an
//! injected RNG; terminal I/O is confined to `display` and `input`, and the
//! binary owns the frame loop.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod score_store;
