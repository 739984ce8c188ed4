//! Blocking boot screen loops for the simulator window.
//!
//! Each loop owns the window until its screen is done and returns `false`
//! if the window is closed first, so the caller can exit without ever
//! reaching the dashboard.

mod loading;
mod start;

pub use loading::run_loading_screen;
pub use start::run_start_screen;
