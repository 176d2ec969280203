use crate::backend::{c_size, DeviceAdd};
use crate::error::Result;

mod sys {
    use std::os::raw::c_int;

    unsafe extern "C" {
        // provided by libcuda_add; copies to the device, launches, syncs and copies back
        pub fn cuda_add(a: *mut f32, b: *mut f32, c: *mut f32, size: c_int);
    }
}

/// The linked `cuda_add` symbol. It reports no errors, so only the size
/// conversion can fail here.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternCudaAdd;

impl DeviceAdd for ExternCudaAdd {
    fn cuda_add(&self, a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()> {
        let size = c_size(c.len())?;

        // the C signature takes mutable inputs but only reads them
        unsafe {
            sys::cuda_add(a.as_ptr() as *mut f32, b.as_ptr() as *mut f32, c.as_mut_ptr(), size);
        }

        Ok(())
    }
}
