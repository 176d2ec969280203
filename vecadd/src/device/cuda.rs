use crate::backend::DeviceAdd;
use crate::config::ModuleSource;
use crate::error::{Error, Result};
use cust::context::{Context, CurrentContext};
use cust::device::Device;
use cust::error::CudaError;
use cust::launch;
use cust::memory::CopyDestination;
use cust::module::{Module, ModuleJitOption};
use cust::stream::{Stream, StreamFlags};
use cust::util::SliceExt;
use cust::CudaFlags;
use log::{debug, info};

const KERNEL_NAME: &str = "kernel_add";
const THREADS_PER_BLOCK: usize = 256;

impl From<CudaError> for Error {
    fn from(err: CudaError) -> Self {
        Error::backend_failure(err.to_string())
    }
}

/// `kernel_add` on one CUDA device, launched through cust.
pub struct CudaDevice {
    ordinal: usize,
    module: Module,
    stream: Stream,
    // Keep context alive for the lifetime of CudaDevice
    #[allow(dead_code)]
    ctx: Context,
}

impl CudaDevice {
    pub fn new(ordinal: usize, source: &ModuleSource) -> Result<Self> {
        cust::init(CudaFlags::empty())?;
        let num_devices = Device::num_devices()? as usize;
        debug!("Found {} CUDA devices", num_devices);
        if ordinal >= num_devices {
            return Err(Error::backend_failure(format!(
                "CUDA device {} requested but {} found",
                ordinal, num_devices
            )));
        }

        let device = Device::get_device(ordinal as u32)?;
        let ctx = Context::new(device)?;
        CurrentContext::set_current(&ctx)?;

        info!("[{ordinal}] Loading module from {}", source.path().display());
        let module = match source {
            ModuleSource::Cubin(path) => {
                let cubin = std::fs::read(path)
                    .map_err(|e| Error::backend_failure(format!("Failed to read CUBIN file: {}", e)))?;
                Module::from_cubin(cubin, &[])?
            }
            ModuleSource::Ptx(path) => {
                let ptx = std::fs::read_to_string(path)
                    .map_err(|e| Error::backend_failure(format!("Failed to read PTX file: {}", e)))?;
                Module::from_ptx(ptx, &[ModuleJitOption::MaxRegisters(256)])?
            }
        };
        // fail at startup rather than on the first call
        module.get_function(KERNEL_NAME)?;
        info!("[{ordinal}] Module loaded");

        let stream = Stream::new(StreamFlags::NON_BLOCKING, None)?;

        Ok(Self { ordinal, module, stream, ctx })
    }
}

impl DeviceAdd for CudaDevice {
    fn cuda_add(&self, a: &[f32], b: &[f32], c: &mut [f32]) -> Result<()> {
        let size = c.len();
        if size == 0 {
            return Ok(());
        }

        let ordinal = self.ordinal;
        let stream = &self.stream;
        let kernel_add = self.module.get_function(KERNEL_NAME)?;
        let blocks_per_grid = size.div_ceil(THREADS_PER_BLOCK);

        let input_a_dev = a.as_dbuf()?;
        let input_b_dev = b.as_dbuf()?;
        let output_dev = c.as_dbuf()?;

        debug!(
            "[{ordinal}] Launching {} ({} blocks, {} threads per block)",
            KERNEL_NAME, blocks_per_grid, THREADS_PER_BLOCK
        );

        unsafe {
            launch!(
                kernel_add<<<blocks_per_grid as u32, THREADS_PER_BLOCK as u32, 0, stream>>>(
                    input_a_dev.as_device_ptr(),
                    input_b_dev.as_device_ptr(),
                    output_dev.as_device_ptr(),
                    size,
                )
            )?;
        }

        stream.synchronize()?;
        output_dev.copy_to(c)?;

        Ok(())
    }
}
