pub mod driver;

pub use driver::{ScanDriver, SweepScope};
