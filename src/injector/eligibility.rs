use crate::scrubber::CharClass;

/// Keywords that open or shape a block. Inserting directly at such a line
/// changes control structure; instrumentation targets the lines inside the
/// block instead.
const STRUCTURAL_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "for", "while", "try", "with", "import", "from", "async",
];

/// Keywords that continue an open block and cannot have a statement placed
/// immediately before them.
const CONTINUATION_KEYWORDS: &[&str] = &["else", "elif", "except", "finally"];

/// Keyword match at an identifier boundary, so `elsewhere` is not `else`.
fn starts_with_keyword(stripped: &str, keyword: &str) -> bool {
    match stripped.strip_prefix(keyword) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_'),
        None => false,
    }
}

/// The line with everything the scrubber classified away removed.
pub fn code_text(text: &str, classes: &[CharClass]) -> String {
    text.chars()
        .zip(classes.iter())
        .filter(|(_, class)| **class == CharClass::Code)
        .map(|(ch, _)| ch)
        .collect()
}

/// Definitions, conditionals, loops, exception clauses, context managers
/// and imports, plus anything that opens a block.
pub fn is_structural(stripped: &str, code_stripped: &str) -> bool {
    STRUCTURAL_KEYWORDS
        .iter()
        .any(|kw| starts_with_keyword(stripped, kw))
        || code_stripped.ends_with(':')
}

pub fn is_continuation(stripped: &str) -> bool {
    CONTINUATION_KEYWORDS
        .iter()
        .any(|kw| starts_with_keyword(stripped, kw))
}

/// Closing brackets only, with at most one trailing comma. Wrapping such a
/// line would detach it from its opening construct.
pub fn is_closing_only(code_stripped: &str) -> bool {
    let body = code_stripped.strip_suffix(',').unwrap_or(code_stripped);
    !body.is_empty() && body.chars().all(|c| matches!(c, ')' | ']' | '}'))
}
