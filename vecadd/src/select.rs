use crate::backend::{AcceleratorBackend, CpuBackend, DeviceAdd, VectorAdd};
use crate::config::{BackendKind, Config};
use crate::error::{Error, Result};
use crate::notice::Notifier;
use log::{info, warn};
use std::sync::Arc;

/// Builds the backend named by `config`.
///
/// `Auto` falls back to the CPU backend when the accelerator cannot be
/// initialised. The fallback happens here, once; a device failure during a
/// later call is returned to the caller as `BackendFailure`.
pub fn select_backend(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Box<dyn VectorAdd>> {
    select_with(config, notifier, open_device)
}

/// [`select_backend`] with a caller-supplied device opener.
pub fn select_with<F>(config: &Config, notifier: Arc<dyn Notifier>, open: F) -> Result<Box<dyn VectorAdd>>
where
    F: FnOnce(&Config) -> Result<Box<dyn DeviceAdd>>,
{
    match config.backend {
        BackendKind::Cpu => {
            info!("Using CPU backend");
            Ok(Box::new(CpuBackend::with_notifier(notifier)))
        }
        BackendKind::Cuda => {
            let device = open(config)?;
            info!("Using CUDA backend on device {}", config.device_ordinal);
            Ok(Box::new(AcceleratorBackend::with_notifier(device, notifier)))
        }
        BackendKind::Auto => match open(config) {
            Ok(device) => {
                info!("Using CUDA backend on device {}", config.device_ordinal);
                Ok(Box::new(AcceleratorBackend::with_notifier(device, notifier)))
            }
            Err(e) => {
                warn!("CUDA backend unavailable ({}), falling back to CPU", e);
                Ok(Box::new(CpuBackend::with_notifier(notifier)))
            }
        },
    }
}

#[cfg(feature = "gpu")]
fn open_device(config: &Config) -> Result<Box<dyn DeviceAdd>> {
    let source = config.module.as_ref().ok_or_else(|| {
        Error::backend_failure(format!(
            "{} or {} is required for the CUDA backend",
            crate::config::CUBIN_PATH_ENV,
            crate::config::PTX_PATH_ENV
        ))
    })?;
    let device = crate::device::CudaDevice::new(config.device_ordinal, source)?;
    Ok(Box::new(device))
}

#[cfg(all(not(feature = "gpu"), feature = "extern-cuda"))]
fn open_device(_config: &Config) -> Result<Box<dyn DeviceAdd>> {
    Ok(Box::new(crate::device::ExternCudaAdd))
}

#[cfg(not(any(feature = "gpu", feature = "extern-cuda")))]
fn open_device(_config: &Config) -> Result<Box<dyn DeviceAdd>> {
    Err(Error::backend_failure(
        "built without CUDA support (enable the `gpu` or `extern-cuda` feature)",
    ))
}
