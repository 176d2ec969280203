fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var("CARGO_FEATURE_EXTERN_CUDA").is_err() {
        return;
    }

    println!("cargo:rerun-if-env-changed=CUDA_ADD_LIB_DIR");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");

    // libcuda_add.so provides the `cuda_add` symbol; it needs cudart at load time.
    // Without CUDA_ADD_LIB_DIR the final artifact has to define `cuda_add` itself.
    let lib_dir = match std::env::var("CUDA_ADD_LIB_DIR") {
        Ok(dir) => dir,
        Err(_) => {
            println!("cargo:warning=CUDA_ADD_LIB_DIR not set, leaving `cuda_add` for the final link");
            return;
        }
    };
    println!("cargo:rustc-link-search=native={}", lib_dir);
    println!("cargo:rustc-link-lib=dylib=cuda_add");

    let cuda_path = std::env::var("CUDA_PATH").unwrap_or_else(|_| "/usr/local/cuda".to_string());
    let cudart_dir = format!("{}/lib64", cuda_path);
    if !std::path::Path::new(&cudart_dir).exists() {
        println!("cargo:warning={} not found, set CUDA_PATH if linking cudart fails", cudart_dir);
    }
    println!("cargo:rustc-link-search=native={}", cudart_dir);
    println!("cargo:rustc-link-lib=dylib=cudart");
}
