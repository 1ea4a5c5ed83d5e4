use std::collections::HashMap;

use serde::Deserialize;

/// A page snapshot for the dev harness: host name plus the body subtree.
#[derive(Debug, Deserialize)]
pub struct PageFixture {
    pub host: String,
    #[serde(default)]
    pub body: Vec<FixtureNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureNode {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub natural_width: u32,
    #[serde(default)]
    pub natural_height: u32,
    #[serde(default)]
    pub rendered_width: u32,
    #[serde(default)]
    pub rendered_height: u32,
    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

/// One scripted event replayed against the live document. Targets refer to
/// element ids in the fixture.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum FixtureStep {
    /// Move the virtual clock forward (fires due timers).
    Advance { ms: u64 },
    /// Insert a subtree under `parent` (body when absent).
    AddNode {
        #[serde(default)]
        parent: Option<String>,
        node: FixtureNode,
    },
    /// Live attribute write (lazy-load simulation).
    SetAttr {
        target: String,
        name: String,
        value: String,
    },
    /// User click on an element.
    Click { target: String },
    /// Simulate the element's current source failing to load.
    FailLoad { target: String },
}
