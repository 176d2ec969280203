mod accelerator;
mod cpu;

pub use accelerator::*;
pub use cpu::*;

use crate::error::{Error, Result};
use std::os::raw::c_int;

/// Element-wise `c[i] = a[i] + b[i]` for `i` in `[0, size)`.
///
/// Implementations check buffer lengths before touching `c`, leave
/// `c[size..]` untouched, and return only once every sum is visible in `c`.
pub trait VectorAdd {
    /// Computation mode reported alongside results, `"CPU"` or `"CUDA"`.
    fn mode(&self) -> &'static str;

    fn add_vectors(&self, a: &[f32], b: &[f32], c: &mut [f32], size: usize) -> Result<()>;
}

impl<T: VectorAdd + ?Sized> VectorAdd for Box<T> {
    fn mode(&self) -> &'static str {
        (**self).mode()
    }

    fn add_vectors(&self, a: &[f32], b: &[f32], c: &mut [f32], size: usize) -> Result<()> {
        (**self).add_vectors(a, b, c, size)
    }
}

/// Converts a C `int` element count, rejecting negative values.
pub fn checked_size(size: i32) -> Result<usize> {
    usize::try_from(size).map_err(|_| Error::invalid_input(format!("size must not be negative, got {}", size)))
}

/// Converts an element count for a C routine taking an `int` size.
pub fn c_size(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| Error::invalid_input(format!("{} elements do not fit a C int", len)))
}

/// Ensures all three buffers hold at least `size` elements.
pub fn validate_buffers(a: &[f32], b: &[f32], c: &[f32], size: usize) -> Result<()> {
    for (name, len) in [("a", a.len()), ("b", b.len()), ("c", c.len())] {
        if len < size {
            return Err(Error::invalid_input(format!(
                "buffer {} has {} elements, size is {}",
                name, len, size
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_reject_negative_size() {
        assert!(matches!(checked_size(-1), Err(Error::InvalidInput(_))));
        assert_eq!(checked_size(0), Ok(0));
        assert_eq!(checked_size(42), Ok(42));
    }

    #[test]
    fn should_reject_counts_beyond_c_int() {
        assert_eq!(c_size(0), Ok(0));
        assert_eq!(c_size(c_int::MAX as usize), Ok(c_int::MAX));

        let too_many = c_int::MAX as usize + 1;
        assert_eq!(
            c_size(too_many),
            Err(Error::invalid_input(format!("{} elements do not fit a C int", too_many)))
        );
    }

    #[test]
    fn should_name_the_short_buffer() {
        let err = validate_buffers(&[1.0, 2.0], &[1.0], &[0.0, 0.0], 2).unwrap_err();
        assert_eq!(err, Error::invalid_input("buffer b has 1 elements, size is 2"));
    }

    #[test]
    fn should_accept_longer_buffers() {
        assert!(validate_buffers(&[1.0, 2.0, 3.0], &[1.0, 2.0], &[0.0; 4], 2).is_ok());
        assert!(validate_buffers(&[], &[], &[], 0).is_ok());
    }
}
