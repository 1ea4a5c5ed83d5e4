pub mod document;
pub mod element;

pub use document::{Document, MutationRecord};
pub use element::{ClickBinding, ElementHandle, ElementRole, WeakElement};
