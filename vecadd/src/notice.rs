use log::info;

pub const CPU_NOTICE: &str = "CUDA unavailable. Using CPU for computation.";
pub const CUDA_NOTICE: &str = "Using CUDA for computation.";

/// Receives the one-line notice each backend emits when it runs.
///
/// The notice is diagnostics only; numeric results never depend on it.
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

/// Prints notices on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notice(&self, message: &str) {
        println!("{}", message);
    }
}

/// Prints notices on stderr, keeping stdout free for machine-readable output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notice(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Routes notices into the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notice(&self, message: &str) {
        info!("{}", message);
    }
}

/// Drops notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notice(&self, _message: &str) {}
}
