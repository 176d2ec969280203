#[cfg(feature = "gpu")]
mod cuda;
#[cfg(feature = "extern-cuda")]
mod extern_cuda;

#[cfg(feature = "gpu")]
pub use cuda::CudaDevice;
#[cfg(feature = "extern-cuda")]
pub use extern_cuda::ExternCudaAdd;
