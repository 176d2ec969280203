#![no_std]

mod vector_add;

pub use vector_add::*;
