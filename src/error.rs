use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// A structural pattern could not be parsed (skipped during sweeps,
    /// fatal only when loaded explicitly).
    PatternParse { pattern: String, reason: String },

    /// A textual phrase pattern failed to compile as a regex.
    PhraseParse { pattern: String, source: regex::Error },

    /// Page fixture or script file could not be read.
    FixtureIo { path: String, source: std::io::Error },

    /// JSON parsing failed (fixture, script, or serde)
    FixtureParse { context: String, source: serde_json::Error },

    /// A scripted step referenced an element id that is not in the document
    ElementNotFound { target: String, context: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::PatternParse { pattern, reason } => {
                write!(f, "Invalid structural pattern '{}': {}", pattern, reason)
            }
            EngineError::PhraseParse { pattern, source } => {
                write!(f, "Invalid phrase pattern '{}': {}", pattern, source)
            }
            EngineError::FixtureIo { path, source } => {
                write!(f, "Could not read '{}': {}", path, source)
            }
            EngineError::FixtureParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            EngineError::ElementNotFound { target, context } => {
                write!(f, "Element '{}' not found: {}", target, context)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::PhraseParse { source, .. } => Some(source),
            EngineError::FixtureIo { source, .. } => Some(source),
            EngineError::FixtureParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
