pub mod model;
pub mod runner;

pub use model::{FixtureNode, FixtureStep, PageFixture};
pub use runner::{apply_step, build_document, load_fixture, load_script};
