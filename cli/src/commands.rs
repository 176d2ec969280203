use crate::args::Command;
use log::debug;
use std::error::Error;
use std::io::Read;
use std::path::Path;
use vecadd::{AddRequest, VectorAdd};

/// Runs one command; `Ok(false)` means the response carried an error.
pub fn run(command: &Command, backend: &dyn VectorAdd) -> Result<bool, Box<dyn Error + Send + Sync>> {
    match command {
        Command::Add { a, b } => {
            let request = AddRequest { array1: a.clone(), array2: b.clone() };
            respond(backend, &request)
        }
        Command::Request { path } => {
            let request = read_request(path, &mut std::io::stdin())?;
            respond(backend, &request)
        }
        Command::Demo { len } => demo(backend, *len),
    }
}

/// Reads an add request from `path`, or from `stdin` when `path` is `-`.
fn read_request(path: &Path, stdin: &mut dyn Read) -> Result<AddRequest, Box<dyn Error + Send + Sync>> {
    let body = if path.as_os_str() == "-" {
        let mut body = String::new();
        stdin.read_to_string(&mut body)?;
        body
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read request file: {}", e))?
    };
    let request = serde_json::from_str(&body).map_err(|e| format!("Invalid add request: {}", e))?;
    Ok(request)
}

fn respond(backend: &dyn VectorAdd, request: &AddRequest) -> Result<bool, Box<dyn Error + Send + Sync>> {
    let response = vecadd::handle_add(backend, request);
    println!("{}", serde_json::to_string(&response)?);
    Ok(!response.is_error())
}

fn demo(backend: &dyn VectorAdd, len: usize) -> Result<bool, Box<dyn Error + Send + Sync>> {
    // predictable data so runs on different backends can be compared by eye
    let input_a: Vec<f32> = (0..len).map(|i| (i % 1000) as f32).collect();
    let input_b: Vec<f32> = (0..len).map(|i| ((i + 1) % 1000) as f32).collect();

    println!("[{}] Processing {} elements", backend.mode(), len);
    let output = vecadd::add_arrays(backend, &input_a, &input_b)?;
    println!("[{}] Computation completed", backend.mode());

    let shown = len.min(10);
    println!("[{}] First {} elements of the output: {:?}", backend.mode(), shown, &output[..shown]);
    debug!("demo output checksum: {}", output.iter().map(|&x| x as f64).sum::<f64>());

    Ok(true)
}
