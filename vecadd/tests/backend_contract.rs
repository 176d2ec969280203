use rand::Rng as _;
use std::sync::{Arc, Mutex};
use vecadd::{
    add_arrays, AcceleratorBackend, CpuBackend, DeviceAdd, Error, Notifier, Result, VectorAdd, CPU_NOTICE,
    CUDA_NOTICE,
};

#[derive(Default)]
struct RecordingNotifier {
    lines: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Stands in for the CUDA routine: sums on the host, element by element.
struct FakeDevice;

impl DeviceAdd for FakeDevice {
    fn cuda_add(&self, a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()> {
        assert_eq!(a.len(), c.len());
        assert_eq!(b.len(), c.len());
        for i in 0..c.len() {
            c[i] = a[i] + b[i];
        }
        Ok(())
    }
}

fn backends() -> Vec<Box<dyn VectorAdd>> {
    let notifier: Arc<dyn Notifier> = Arc::new(vecadd::SilentNotifier);
    vec![
        Box::new(CpuBackend::with_notifier(notifier.clone())) as Box<dyn VectorAdd>,
        Box::new(AcceleratorBackend::with_notifier(FakeDevice, notifier)) as Box<dyn VectorAdd>,
    ]
}

#[test]
fn should_produce_same_sums_on_both_backends() {
    for backend in backends() {
        let mut c = [0.0f32; 3];
        backend.add_vectors(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &mut c, 3).unwrap();
        assert_eq!(c, [11.0, 22.0, 33.0], "{}", backend.mode());
    }
}

#[test]
fn should_match_reference_for_random_sizes() {
    let mut rng = rand::thread_rng();
    for backend in backends() {
        for _ in 0..20 {
            let n = rng.gen_range(0..512usize);
            let a: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0e3f32..1.0e3)).collect();
            let b: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0e3f32..1.0e3)).collect();

            let c = add_arrays(backend.as_ref(), &a, &b).unwrap();
            for i in 0..n {
                assert_eq!(c[i], a[i] + b[i]);
            }

            // commutative: swapping the inputs changes nothing
            let swapped = add_arrays(backend.as_ref(), &b, &a).unwrap();
            assert_eq!(c, swapped);
        }
    }
}

#[test]
fn should_leave_output_untouched_for_zero_size() {
    for backend in backends() {
        let mut c = [4.0f32, 5.0];
        backend.add_vectors(&[1.0, 1.0], &[1.0, 1.0], &mut c, 0).unwrap();
        assert_eq!(c, [4.0, 5.0]);
    }
}

#[test]
fn should_preserve_float_special_values() {
    for backend in backends() {
        let a = [f32::NAN, f32::INFINITY, -0.0];
        let b = [1.0, f32::NEG_INFINITY, 0.0];
        let mut c = [0.0f32; 3];
        backend.add_vectors(&a, &b, &mut c, 3).unwrap();

        assert!(c[0].is_nan());
        assert!(c[1].is_nan());
        assert_eq!(c[2], 0.0);
        assert!(c[2].is_sign_positive());
    }
}

#[test]
fn should_reject_short_buffers_as_invalid_input() {
    for backend in backends() {
        let mut c = [0.0f32; 3];
        let err = backend.add_vectors(&[1.0, 2.0], &[1.0, 2.0, 3.0], &mut c, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(c, [0.0; 3]);
    }
}

#[test]
fn should_reject_mismatched_arrays() {
    for backend in backends() {
        let err = add_arrays(backend.as_ref(), &[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, Error::invalid_input(vecadd::LENGTH_MISMATCH));
    }
}

#[test]
fn should_emit_distinct_notice_per_backend() {
    let notifier = Arc::new(RecordingNotifier::default());
    let cpu = CpuBackend::with_notifier(notifier.clone());
    let accelerator = AcceleratorBackend::with_notifier(FakeDevice, notifier.clone());

    let mut c = [0.0f32; 1];
    cpu.add_vectors(&[1.0], &[2.0], &mut c, 1).unwrap();
    accelerator.add_vectors(&[1.0], &[2.0], &mut c, 1).unwrap();

    assert_eq!(notifier.lines(), vec![CPU_NOTICE.to_string(), CUDA_NOTICE.to_string()]);
    assert_ne!(CPU_NOTICE, CUDA_NOTICE);
}
