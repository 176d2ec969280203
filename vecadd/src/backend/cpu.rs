use crate::backend::{validate_buffers, VectorAdd};
use crate::error::Result;
use crate::notice::{Notifier, StdoutNotifier, CPU_NOTICE};
use log::debug;
use std::sync::Arc;

/// Sums on the host, one element at a time.
pub struct CpuBackend {
    notifier: Arc<dyn Notifier>,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(StdoutNotifier))
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorAdd for CpuBackend {
    fn mode(&self) -> &'static str {
        "CPU"
    }

    fn add_vectors(&self, a: &[f32], b: &[f32], c: &mut [f32], size: usize) -> Result<()> {
        validate_buffers(a, b, c, size)?;
        self.notifier.notice(CPU_NOTICE);
        debug!("[CPU] adding {} elements", size);

        logic::add_slices(a, b, c, size);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::notice::SilentNotifier;

    fn backend() -> CpuBackend {
        CpuBackend::with_notifier(Arc::new(SilentNotifier))
    }

    #[test]
    fn should_add_elementwise() {
        let mut c = [0.0f32; 3];
        backend().add_vectors(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &mut c, 3).unwrap();
        assert_eq!(c, [11.0, 22.0, 33.0]);
    }

    #[test]
    fn should_not_write_when_output_is_short() {
        let mut c = [9.0f32; 2];
        let err = backend().add_vectors(&[1.0; 3], &[1.0; 3], &mut c, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(c, [9.0, 9.0]);
    }

    #[test]
    fn should_report_cpu_mode() {
        assert_eq!(backend().mode(), "CPU");
    }
}
