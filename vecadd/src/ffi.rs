use crate::backend::{checked_size, VectorAdd};
use crate::error::{Error, Result};
use log::error;
use std::os::raw::c_int;

#[cfg(feature = "extern-cuda")]
fn linked_backend() -> impl VectorAdd {
    crate::backend::AcceleratorBackend::new(crate::device::ExternCudaAdd)
}

#[cfg(not(feature = "extern-cuda"))]
fn linked_backend() -> impl VectorAdd {
    crate::backend::CpuBackend::new()
}

/// C entry point: `c[i] = a[i] + b[i]` for `i` in `[0, size)`.
///
/// The backend is fixed when the library is built: the linked `cuda_add`
/// routine with the `extern-cuda` feature, the CPU loop otherwise. Either way
/// one notice line naming the backend goes to stdout.
///
/// A negative `size` or a null pointer with a positive `size` is logged and
/// the call returns without writing to `c`.
///
/// # Safety
///
/// For a positive `size`, `a` and `b` must point to `size` readable floats and
/// `c` to `size` writable floats. `c` must not overlap `a` or `b`; aliasing is
/// undefined behavior.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn add_vectors(a: *const f32, b: *const f32, c: *mut f32, size: c_int) {
    let result = checked_size(size).and_then(|size| unsafe { add_raw(&linked_backend(), a, b, c, size) });
    if let Err(e) = result {
        error!("add_vectors: {}", e);
    }
}

unsafe fn add_raw(backend: &dyn VectorAdd, a: *const f32, b: *const f32, c: *mut f32, size: usize) -> Result<()> {
    if size == 0 {
        return backend.add_vectors(&[], &[], &mut [], 0);
    }

    if a.is_null() || b.is_null() || c.is_null() {
        return Err(Error::invalid_input(format!("null buffer with size {}", size)));
    }

    let (a, b, c) = unsafe {
        (
            std::slice::from_raw_parts(a, size),
            std::slice::from_raw_parts(b, size),
            std::slice::from_raw_parts_mut(c, size),
        )
    };
    backend.add_vectors(a, b, c, size)
}

// unit-test binaries link without libcuda_add
#[cfg(all(test, feature = "extern-cuda"))]
#[unsafe(no_mangle)]
unsafe extern "C" fn cuda_add(a: *mut f32, b: *mut f32, c: *mut f32, size: c_int) {
    for i in 0..size as usize {
        unsafe { *c.add(i) = *a.add(i) + *b.add(i) };
    }
}
