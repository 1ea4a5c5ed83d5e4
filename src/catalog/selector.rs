use crate::dom::ElementHandle;
use crate::error::EngineError;

/// One attribute predicate inside a structural pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Contains(String, String),
}

/// One compound step: `tag#id.class[attr*=value]`.
#[derive(Debug, Clone, Default)]
struct Step {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

/// A parsed selector-like predicate over tag name, id, class tokens, and
/// attribute substrings, with at most one descendant step (`.product img`).
/// Deliberately small: anything outside this grammar is a parse error, which
/// sweeps treat as a skippable pattern.
#[derive(Debug, Clone)]
pub struct StructuralPattern {
    ancestor: Option<Step>,
    target: Step,
    source: String,
}

impl StructuralPattern {
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(parse_err(input, "empty pattern"));
        }

        let parts: Vec<&str> = source.split_whitespace().collect();
        match parts.len() {
            1 => Ok(StructuralPattern {
                ancestor: None,
                target: parse_step(parts[0], input)?,
                source: source.to_string(),
            }),
            2 => Ok(StructuralPattern {
                ancestor: Some(parse_step(parts[0], input)?),
                target: parse_step(parts[1], input)?,
                source: source.to_string(),
            }),
            _ => Err(parse_err(input, "more than one descendant step")),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, el: &ElementHandle) -> bool {
        if !step_matches(&self.target, el) {
            return false;
        }
        match &self.ancestor {
            None => true,
            Some(ancestor) => {
                let mut current = el.parent();
                while let Some(node) = current {
                    if step_matches(ancestor, &node) {
                        return true;
                    }
                    current = node.parent();
                }
                false
            }
        }
    }
}

fn parse_err(pattern: &str, reason: &str) -> EngineError {
    EngineError::PatternParse {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_step(input: &str, whole: &str) -> Result<Step, EngineError> {
    let mut step = Step::default();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    // Leading tag name
    let start = i;
    while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '-') {
        i += 1;
    }
    if i > start {
        step.tag = Some(chars[start..i].iter().collect::<String>().to_ascii_lowercase());
    }

    while i < chars.len() {
        match chars[i] {
            '#' => {
                i += 1;
                let name = take_name(&chars, &mut i);
                if name.is_empty() {
                    return Err(parse_err(whole, "empty id"));
                }
                step.id = Some(name);
            }
            '.' => {
                i += 1;
                let name = take_name(&chars, &mut i);
                if name.is_empty() {
                    return Err(parse_err(whole, "empty class"));
                }
                step.classes.push(name);
            }
            '[' => {
                i += 1;
                let test = parse_attr_test(&chars, &mut i, whole)?;
                step.attrs.push(test);
            }
            other => {
                return Err(parse_err(whole, &format!("unsupported token '{}'", other)));
            }
        }
    }

    if step.tag.is_none() && step.id.is_none() && step.classes.is_empty() && step.attrs.is_empty() {
        return Err(parse_err(whole, "empty step"));
    }
    Ok(step)
}

fn take_name(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len()
        && (chars[*i].is_ascii_alphanumeric() || chars[*i] == '-' || chars[*i] == '_')
    {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn parse_attr_test(chars: &[char], i: &mut usize, whole: &str) -> Result<AttrTest, EngineError> {
    let name = take_attr_name(chars, i);
    if name.is_empty() {
        return Err(parse_err(whole, "empty attribute name"));
    }

    match chars.get(*i) {
        Some(']') => {
            *i += 1;
            Ok(AttrTest::Present(name))
        }
        Some('=') => {
            *i += 1;
            let value = take_attr_value(chars, i, whole)?;
            expect_close(chars, i, whole)?;
            Ok(AttrTest::Equals(name, value))
        }
        Some('*') if chars.get(*i + 1) == Some(&'=') => {
            *i += 2;
            let value = take_attr_value(chars, i, whole)?;
            expect_close(chars, i, whole)?;
            Ok(AttrTest::Contains(name, value))
        }
        _ => Err(parse_err(whole, "unclosed attribute test")),
    }
}

fn take_attr_name(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len()
        && (chars[*i].is_ascii_alphanumeric() || chars[*i] == '-' || chars[*i] == '_')
    {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn take_attr_value(chars: &[char], i: &mut usize, whole: &str) -> Result<String, EngineError> {
    let quoted = chars.get(*i) == Some(&'"') || chars.get(*i) == Some(&'\'');
    let quote = if quoted {
        let q = chars[*i];
        *i += 1;
        Some(q)
    } else {
        None
    };

    let start = *i;
    while *i < chars.len() {
        match quote {
            Some(q) if chars[*i] == q => break,
            None if chars[*i] == ']' => break,
            _ => *i += 1,
        }
    }
    let value: String = chars[start..*i].iter().collect();

    if let Some(q) = quote {
        if chars.get(*i) != Some(&q) {
            return Err(parse_err(whole, "unterminated quoted value"));
        }
        *i += 1;
    }
    Ok(value)
}

fn expect_close(chars: &[char], i: &mut usize, whole: &str) -> Result<(), EngineError> {
    if chars.get(*i) == Some(&']') {
        *i += 1;
        Ok(())
    } else {
        Err(parse_err(whole, "unclosed attribute test"))
    }
}

fn step_matches(step: &Step, el: &ElementHandle) -> bool {
    if let Some(tag) = &step.tag {
        if el.tag() != *tag {
            return false;
        }
    }
    if let Some(id) = &step.id {
        if el.id().as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    for class in &step.classes {
        if !el.has_class(class) {
            return false;
        }
    }
    for test in &step.attrs {
        if !attr_matches(test, el) {
            return false;
        }
    }
    true
}

fn lookup_attr(el: &ElementHandle, name: &str) -> Option<String> {
    match name {
        "class" => {
            let joined = el.class_string();
            if joined.is_empty() { None } else { Some(joined) }
        }
        "id" => el.id(),
        _ => el.attr(name),
    }
}

fn attr_matches(test: &AttrTest, el: &ElementHandle) -> bool {
    match test {
        AttrTest::Present(name) => lookup_attr(el, name).is_some(),
        AttrTest::Equals(name, value) => lookup_attr(el, name).as_deref() == Some(value.as_str()),
        AttrTest::Contains(name, value) => {
            lookup_attr(el, name).is_some_and(|actual| actual.contains(value.as_str()))
        }
    }
}
