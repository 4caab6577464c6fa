use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

mod app;
mod config;
mod context;
mod dispatch;
mod palette;
mod render;
mod ui;

use crate::app::SessionEnd;
use crate::context::LauncherContext;
use crate::dispatch::{Dispatcher, ProcessLauncher};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    let args = CommandLineArgs::parse();

    let launcher = match args.simulator_dir {
        Some(dir) => ProcessLauncher::new(dir),
        None => ProcessLauncher::beside_current_exe(),
    };
    log::info!(
        "looking for simulators in {}",
        launcher.simulator_dir().display()
    );

    let context = LauncherContext::initialize();
    match app::run(context, Dispatcher::new(launcher))? {
        SessionEnd::Closed => log::info!("launcher closed"),
        /* the simulator runs on by itself; this process is done */
        SessionEnd::Dispatched(target) => log::info!("handed over to {target}"),
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CommandLineArgs {
    /// directory holding the simulator programs (defaults to the launcher's own directory)
    #[arg(short, long)]
    simulator_dir: Option<PathBuf>,
}
