mod args;
mod commands;

use args::{Cli, NoticeTarget};
use backtrace::Backtrace;
use clap::Parser;
use log::LevelFilter;
use std::error::Error;
use std::sync::Arc;
use vecadd::{Config, LogNotifier, Notifier, SilentNotifier, StderrNotifier, StdoutNotifier};

// RUST_LOG still wins when set
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init();
}

fn notifier(target: NoticeTarget) -> Arc<dyn Notifier> {
    match target {
        NoticeTarget::Stderr => Arc::new(StderrNotifier),
        NoticeTarget::Stdout => Arc::new(StdoutNotifier),
        NoticeTarget::Log => Arc::new(LogNotifier),
        NoticeTarget::Silent => Arc::new(SilentNotifier),
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = Backtrace::new();
        eprintln!("Thread panicked: {}", panic_info);
        eprintln!("Backtrace:\n{:?}", backtrace);
    }));

    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // Pick the backend once, at startup
    let backend = vecadd::select_backend(&config, notifier(cli.notice))?;

    log::info!("{}", cli.command.description());

    if !commands::run(&cli.command, backend.as_ref())? {
        std::process::exit(1);
    }

    Ok(())
}
