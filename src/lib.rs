//! Desktop EV instrument cluster.
//!
//! The cluster state machine and all drawing live in `cluster-common`; this
//! crate adds the host side:
//!
//! - [`config`]: command-line options and launch configuration
//! - [`controller`]: a thread-safe handle for driving a running cluster
//! - [`demo`]: a scripted drive using the controller
//! - `app`, `input`, `screens`: the simulator window, keyboard mapping and
//!   boot screen loops (behind the `simulator` feature)

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod controller;
pub mod demo;
pub mod error;

#[cfg(feature = "simulator")]
pub mod app;
#[cfg(feature = "simulator")]
pub mod input;
#[cfg(feature = "simulator")]
pub mod screens;

pub use config::{Cli, LaunchOptions};
pub use controller::{CommandQueue, Controller, channel};
pub use error::AppError;
