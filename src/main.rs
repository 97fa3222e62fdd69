use anyhow::Context;
use std::io::IsTerminal;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod clock;
mod config;
mod input;
mod list;
mod session;
mod sort;
mod ui;

fn main() {
    let args = cli::Opt::from_args();
    let result = run(args);

    if let Err(e) = result {
        eprintln!("sortviz error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(args: cli::Opt) -> anyhow::Result<()> {
    init_logging();

    /* Validate before touching the terminal, so a bad configuration
     * never leaves a half-initialized screen behind. */
    let config = args.into_config().context("invalid configuration")?;
    debug!(?config, "starting");

    let theme = ui::Theme::default();
    let session = session::Session::new(config.clone());
    let mut user_interface = ui::UserInterface::new(session, config.fps);

    let mut canvas = ui::curses::init(&theme);
    user_interface.mainloop(&mut canvas);
    ui::curses::teardown();

    Ok(())
}

/* Logs go to stderr and stay silent unless RUST_LOG asks for them. They
 * are also dropped while stderr is the terminal curses draws on. */
fn init_logging() {
    let requested = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let terminal = std::io::stderr().is_terminal();
    if requested.is_some() && terminal {
        eprintln!(
            "sortviz: {} ignored while stderr is a terminal, redirect stderr to log",
            EnvFilter::DEFAULT_ENV
        );
    }

    if let Some(filter) = log_filter(requested, terminal) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }
}

/// The filter to log with, or `None` when nothing should be logged.
fn log_filter(requested: Option<String>, stderr_is_terminal: bool) -> Option<EnvFilter> {
    if stderr_is_terminal {
        return None;
    }
    EnvFilter::try_new(requested?).ok()
}
