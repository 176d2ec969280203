/// Sum of one element pair. Shared by the host loop and the device kernel so
/// both paths round identically.
#[inline(always)]
pub fn add_element(a: f32, b: f32) -> f32 {
    a + b
}

/// Writes `a[i] + b[i]` into `c[i]` for every `i` in `[0, size)`.
///
/// Callers check that all three slices hold at least `size` elements;
/// slicing panics otherwise.
pub fn add_slices(a: &[f32], b: &[f32], c: &mut [f32], size: usize) {
    let a = &a[..size];
    let b = &b[..size];
    let c = &mut c[..size];
    for ((out, &x), &y) in c.iter_mut().zip(a).zip(b) {
        *out = add_element(x, y);
    }
}
