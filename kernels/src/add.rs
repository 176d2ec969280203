/// One thread per element; threads past `size` exit without touching memory.
#[cuda_std::kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn kernel_add(
    input_a_ptr: *const f32,
    input_b_ptr: *const f32,
    output_ptr: *mut f32,
    size: usize,
) {
    let thread_idx = cuda_std::thread::index() as usize;
    if thread_idx >= size {
        return;
    }

    let a = unsafe { *input_a_ptr.add(thread_idx) };
    let b = unsafe { *input_b_ptr.add(thread_idx) };

    unsafe {
        *output_ptr.add(thread_idx) = logic::add_element(a, b);
    }
}
