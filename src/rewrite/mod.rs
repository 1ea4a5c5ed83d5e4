pub mod assets;
pub mod engine;

pub use engine::Rewriter;
