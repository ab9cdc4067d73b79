pub mod types;
pub mod complex;

pub use types::{ComplexFixed, Fixed};

/// Complex sample with 16 fractional bits, the precision the benchmark
/// harnesses use for their fixed-point runs.
pub type Q16 = ComplexFixed<16>;
