pub mod series;
pub mod velocity;

pub use series::SpeedSeries;
pub use velocity::{backward_difference, estimate_speed};
