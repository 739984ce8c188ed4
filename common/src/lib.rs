//! Platform-agnostic core of the EV instrument cluster.
//!
//! Everything that decides what the cluster shows lives here, generic over
//! `embedded-graphics` draw targets, so the same state machine and widgets
//! run in the desktop simulator and in tests against an in-memory buffer:
//!
//! - [`cluster`]: the cluster state machine driven by [`Command`]s and time
//! - [`gauge`]: speed range, needle, pedals, lamps and battery
//! - [`indicator`]: turn indicator blinking
//! - [`startup`]: the staged startup reveal and lamp self-test
//! - [`screens`]: start and loading screen state, boot screen flow
//! - [`command`]: external calls and the keyboard mapping
//! - [`animations`]: lamp color fades
//! - [`layout`]: window-relative geometry
//! - [`widgets`] and [`render`]: drawing
//! - [`colors`], [`config`], [`styles`]: constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Time is passed in as
//! `core::time::Duration`, and float math goes through `micromath`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod cluster;
pub mod colors;
pub mod command;
pub mod config;
pub mod gauge;
pub mod indicator;
pub mod layout;
pub mod math;
pub mod render;
pub mod screens;
pub mod startup;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use cluster::{Cluster, ClusterSettings, Popup};
pub use command::{Command, Key, key_commands};
pub use indicator::Side;
pub use layout::Layout;
pub use render::draw_dashboard;
pub use screens::{BootOptions, LoadingEvent, LoadingScreen, Screen, StartScreen};
