use crate::backend::{validate_buffers, VectorAdd};
use crate::error::Result;
use crate::notice::{Notifier, StdoutNotifier, CUDA_NOTICE};
use log::{debug, error};
use std::sync::Arc;

/// Device-side `cuda_add`: writes `a[i] + b[i]` into `c[i]` for every index of
/// the (equal length) slices.
///
/// Implementations must be synchronous: the sums are in `c` when this returns.
/// `a` and `b` are read only, even where the underlying C routine takes
/// mutable pointers.
pub trait DeviceAdd {
    fn cuda_add(&self, a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()>;
}

impl<D: DeviceAdd + ?Sized> DeviceAdd for Box<D> {
    fn cuda_add(&self, a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()> {
        (**self).cuda_add(a, b, c)
    }
}

/// Forwards every call to a [`DeviceAdd`] routine without computing anything
/// on the host.
pub struct AcceleratorBackend<D> {
    device: D,
    notifier: Arc<dyn Notifier>,
}

impl<D: DeviceAdd> AcceleratorBackend<D> {
    pub fn new(device: D) -> Self {
        Self::with_notifier(device, Arc::new(StdoutNotifier))
    }

    pub fn with_notifier(device: D, notifier: Arc<dyn Notifier>) -> Self {
        Self { device, notifier }
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: DeviceAdd> VectorAdd for AcceleratorBackend<D> {
    fn mode(&self) -> &'static str {
        "CUDA"
    }

    fn add_vectors(&self, a: &[f32], b: &[f32], c: &mut [f32], size: usize) -> Result<()> {
        validate_buffers(a, b, c, size)?;
        self.notifier.notice(CUDA_NOTICE);
        debug!("[CUDA] forwarding {} elements to device", size);

        self.device
            .cuda_add(&a[..size], &b[..size], &mut c[..size])
            .inspect_err(|e| error!("[CUDA] cuda_add failed: {}", e))
    }
}
