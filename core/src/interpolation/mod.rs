pub mod linear;

pub use linear::LinearInterpolant;
