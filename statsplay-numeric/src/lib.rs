#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod descriptive;
pub mod distribution;
pub mod fit;
pub mod grid;
pub mod histogram;

pub use descriptive::{mean, median, summarize, Summary};
pub use distribution::normal_pdf;
pub use fit::{evaluate_line, polyfit_linear, LinearFit};
pub use grid::linspace;
pub use histogram::{histogram, Histogram};
