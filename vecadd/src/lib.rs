//! Element-wise `f32` vector addition behind a pluggable backend.
//!
//! Two backends implement [`VectorAdd`]:
//!
//! * [`CpuBackend`] sums on the host with a plain loop.
//! * [`AcceleratorBackend`] hands the buffers to a [`DeviceAdd`] routine
//!   (a CUDA kernel with the `gpu` feature, a linked `cuda_add` symbol with
//!   `extern-cuda`, or a fake in tests).
//!
//! Rust callers pick one at startup with [`select_backend`]. C callers get
//! the exported [`add_vectors`] symbol, whose backend is fixed at build time.
//!
//! The output buffer may not alias an input. The borrow checker enforces this
//! for Rust callers:
//!
//! ```compile_fail
//! use vecadd::{CpuBackend, VectorAdd};
//!
//! let backend = CpuBackend::new();
//! let mut a = vec![1.0f32, 2.0];
//! let b = vec![3.0f32, 4.0];
//! backend.add_vectors(&a, &b, &mut a, 2).unwrap();
//! ```

mod backend;
mod config;
#[cfg(any(feature = "gpu", feature = "extern-cuda"))]
mod device;
mod error;
mod ffi;
mod notice;
mod request;
mod select;

pub use backend::*;
pub use config::*;
#[cfg(any(feature = "gpu", feature = "extern-cuda"))]
pub use device::*;
pub use error::*;
pub use ffi::add_vectors;
pub use notice::*;
pub use request::*;
pub use select::*;
