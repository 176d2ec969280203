use crate::error::{Error, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const BACKEND_ENV: &str = "VECADD_BACKEND";
pub const DEVICE_ENV: &str = "VECADD_DEVICE";
pub const PTX_PATH_ENV: &str = "PTX_PATH";
pub const CUBIN_PATH_ENV: &str = "CUBIN_PATH";

/// Which backend to build at startup.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum BackendKind {
    Cpu,
    #[value(alias = "gpu")]
    Cuda,
    /// CUDA when it initialises, CPU otherwise
    #[default]
    Auto,
}

impl std::str::FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| Error::invalid_input(format!("unknown backend '{}' (expected cpu, cuda or auto)", s)))
    }
}

/// Compiled `kernel_add` module for the CUDA device routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModuleSource {
    Ptx(PathBuf),
    Cubin(PathBuf),
}

impl ModuleSource {
    pub fn path(&self) -> &Path {
        match self {
            ModuleSource::Ptx(path) | ModuleSource::Cubin(path) => path,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendKind,
    pub device_ordinal: usize,
    pub module: Option<ModuleSource>,
}

impl Config {
    /// Defaults overridden by `VECADD_BACKEND`, `VECADD_DEVICE`, `CUBIN_PATH`
    /// and `PTX_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(backend) = lookup(BACKEND_ENV) {
            config.backend = backend.trim().parse()?;
        }

        if let Some(ordinal) = lookup(DEVICE_ENV) {
            config.device_ordinal = ordinal.trim().parse::<usize>().map_err(|e| {
                Error::invalid_input(format!("{} must be a device ordinal, got '{}': {}", DEVICE_ENV, ordinal, e))
            })?;
        }

        // CUBIN wins over PTX when both are set
        config.module = match (lookup(CUBIN_PATH_ENV), lookup(PTX_PATH_ENV)) {
            (Some(cubin), _) => Some(ModuleSource::Cubin(PathBuf::from(cubin))),
            (None, Some(ptx)) => Some(ModuleSource::Ptx(PathBuf::from(ptx))),
            (None, None) => None,
        };

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_default_to_auto_without_module() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend, BackendKind::Auto);
        assert_eq!(config.module, None);
    }

    #[test]
    fn should_read_backend_and_device() {
        let config = Config::from_vars(vars(&[(BACKEND_ENV, "GPU"), (DEVICE_ENV, " 2 ")])).unwrap();
        assert_eq!(config.backend, BackendKind::Cuda);
        assert_eq!(config.device_ordinal, 2);
    }

    #[test]
    fn should_prefer_cubin_over_ptx() {
        let config = Config::from_vars(vars(&[(PTX_PATH_ENV, "k.ptx"), (CUBIN_PATH_ENV, "k.cubin")])).unwrap();
        assert_eq!(config.module, Some(ModuleSource::Cubin(PathBuf::from("k.cubin"))));

        let config = Config::from_vars(vars(&[(PTX_PATH_ENV, "k.ptx")])).unwrap();
        assert_eq!(config.module.as_ref().map(ModuleSource::path), Some(Path::new("k.ptx")));
    }

    #[test]
    fn should_reject_bad_values() {
        let err = Config::from_vars(vars(&[(BACKEND_ENV, "tpu")])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = Config::from_vars(vars(&[(DEVICE_ENV, "-1")])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
