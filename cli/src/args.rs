use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vecadd::{BackendKind, Config, ModuleSource};

#[derive(Parser)]
#[command(name = "vecadd")]
#[command(about = "Element-wise f32 vector addition on CUDA with CPU fallback")]
pub struct Cli {
    /// Backend to run on (overrides VECADD_BACKEND)
    #[arg(short = 'b', long, value_enum, global = true)]
    pub backend: Option<BackendKind>,

    /// CUDA device ordinal (overrides VECADD_DEVICE)
    #[arg(short = 'd', long, global = true)]
    pub device: Option<usize>,

    /// PTX module containing kernel_add (overrides PTX_PATH)
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "cubin")]
    pub ptx: Option<PathBuf>,

    /// CUBIN module containing kernel_add (overrides CUBIN_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    pub cubin: Option<PathBuf>,

    /// Where backend notices go; stdout then carries only command output
    #[arg(long, value_enum, default_value = "stderr", global = true)]
    pub notice: NoticeTarget,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum NoticeTarget {
    Stderr,
    Stdout,
    Log,
    Silent,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Add two comma-separated vectors and print the JSON response
    Add {
        /// First vector, e.g. 1,2,3
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<f32>,
        /// Second vector, e.g. 4,5,6
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<f32>,
    },
    /// Answer a JSON request {"array1": [...], "array2": [...]} read from a file, or stdin with -
    Request {
        path: PathBuf,
    },
    /// Add two predictable vectors and print the first elements of the result
    Demo {
        /// Number of elements
        #[arg(long, default_value_t = 1 << 20)]
        len: usize,
    },
}

impl Cli {
    /// Applies command-line overrides on top of an environment-derived config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(device) = self.device {
            config.device_ordinal = device;
        }
        if let Some(cubin) = &self.cubin {
            config.module = Some(ModuleSource::Cubin(cubin.clone()));
        } else if let Some(ptx) = &self.ptx {
            config.module = Some(ModuleSource::Ptx(ptx.clone()));
        }
    }
}

impl Command {
    pub fn description(&self) -> String {
        match self {
            Command::Add { a, b } => format!("Adding vectors of {} and {} elements", a.len(), b.len()),
            Command::Request { path } => format!("Answering add request from '{}'", path.display()),
            Command::Demo { len } => format!("Running demo addition over {} elements", len),
        }
    }
}
