pub mod loader;
pub mod table;

pub use loader::{load_samples, read_samples, write_samples, REQUIRED_COLUMNS};
pub use table::SampleTable;
