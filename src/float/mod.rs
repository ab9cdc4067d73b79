pub mod complex;

pub use crate::common::{ComplexSample, FftError, FftProcess};
pub use num_complex::{Complex32, Complex64};
