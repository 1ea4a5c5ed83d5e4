pub mod classifier;

pub use classifier::{DEFAULT_MIN_ICON_PX, Verdict, classify_button, classify_image};
