//! Desktop EV instrument cluster.
//!
//! Run with `RUST_LOG=debug` to log every applied command.

use clap::Parser;
use env_logger::{Builder, Env};
use ev_cluster::{AppError, Cli, app, channel, demo};

fn main() -> Result<(), AppError> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = Cli::parse().into_options()?;
    let (controller, queue) = channel();

    let demo = options.demo.then(|| demo::spawn(controller.clone(), options.settings.top_speed));

    app::run(options, &queue)?;

    // Closing the queue ends the demo thread on its next send
    drop(queue);
    if let Some(handle) = demo {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => log::warn!("Demo thread panicked"),
        }
    }
    Ok(())
}
