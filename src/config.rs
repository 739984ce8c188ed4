//! Command-line options and launch configuration.
//!
//! Every option maps onto one of the launch-time setters of the cluster:
//! window size, which boot screens to show, and the gauge values the
//! dashboard starts with.

use clap::Parser;
use cluster_common::config::{DEFAULT_HEIGHT, DEFAULT_TOP_SPEED, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use cluster_common::{BootOptions, ClusterSettings};
use embedded_graphics::prelude::Size;

use crate::error::AppError;

/// Largest simulator pixel scale.
pub const MAX_SCALE: u32 = 4;

#[derive(Parser, Debug, Clone)]
#[command(name = "ev-cluster", version, about = "Animated EV instrument cluster")]
pub struct Cli {
    /// Display width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Display height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window pixel scale
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Top of the speedometer scale in km/h
    #[arg(long, default_value_t = DEFAULT_TOP_SPEED)]
    pub top_speed: u32,

    /// Starting battery level in percent
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub battery: u8,

    /// Start with the charging lamp on
    #[arg(long)]
    pub charging: bool,

    /// Skip the start screen
    #[arg(long)]
    pub skip_start: bool,

    /// Skip the loading screen
    #[arg(long)]
    pub skip_loading: bool,

    /// Hide the creator button on the start screen
    #[arg(long)]
    pub hide_creator: bool,

    /// Keep the speed when the accelerator is released
    #[arg(long)]
    pub no_auto_reset: bool,

    /// Drive the cluster from a scripted demo instead of only the keyboard
    #[arg(long)]
    pub demo: bool,
}

/// Validated launch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOptions {
    pub size: Size,
    pub scale: u32,
    pub boot: BootOptions,
    pub settings: ClusterSettings,
    pub demo: bool,
}

impl Cli {
    pub fn into_options(self) -> Result<LaunchOptions, AppError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(AppError::InvalidSize {
                width: self.width,
                height: self.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(AppError::InvalidScale { scale: self.scale, max: MAX_SCALE });
        }

        Ok(LaunchOptions {
            size: Size::new(self.width, self.height),
            scale: self.scale,
            boot: BootOptions {
                skip_start: self.skip_start,
                skip_loading: self.skip_loading,
                hide_creator: self.hide_creator,
            },
            settings: ClusterSettings {
                top_speed: self.top_speed,
                battery: self.battery,
                charging: self.charging,
                auto_reset: !self.no_auto_reset,
            },
            demo: self.demo,
        })
    }
}
