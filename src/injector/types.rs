use serde::Deserialize;

use crate::error::InstrumentError;
use crate::scrubber::CharClass;
use crate::source::Newline;

/// Which lines are candidates for instrumentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Every eligible line.
    Full,
    /// Only eligible lines carrying the policy's marker token.
    Marked,
}

/// Shape of the generated instrumentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapStyle {
    /// A sink call emitted immediately before the line.
    PrefixCall,
    /// The line re-emitted inside a try/except that reports and swallows
    /// failures.
    GuardWrap,
}

/// Caller-supplied configuration for one instrumentation pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InjectionPolicy {
    /// Lines indented deeper than this many units are never wrapped.
    pub max_indent_depth: usize,
    /// Width of one indentation level, in spaces.
    pub indent_unit: usize,
    pub selection_mode: SelectionMode,
    /// Token a line must carry under `SelectionMode::Marked`.
    pub marker: String,
    pub wrap_style: WrapStyle,
}

impl Default for InjectionPolicy {
    fn default() -> Self {
        Self {
            max_indent_depth: 16,
            indent_unit: 4,
            selection_mode: SelectionMode::Full,
            marker: "# probe".to_string(),
            wrap_style: WrapStyle::PrefixCall,
        }
    }
}

impl InjectionPolicy {
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if self.indent_unit == 0 {
            return Err(InstrumentError::ZeroIndentUnit);
        }
        if self.selection_mode == SelectionMode::Marked && self.marker.trim().is_empty() {
            return Err(InstrumentError::EmptyMarker);
        }
        Ok(())
    }
}

/// Net bracket nesting across the whole file.
///
/// Counts only characters the scrubber classified as code, so brackets
/// inside same-line strings and comments never skew the depth. Unbalanced
/// input just leaves the depth non-zero, which suppresses trailing
/// injections.
#[derive(Debug, Default)]
pub struct NestingState {
    depth: i32,
}

impl NestingState {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Fold one line in. Returns (depth_before, depth_after).
    pub fn apply_line(&mut self, text: &str, classes: &[CharClass]) -> (i32, i32) {
        let before = self.depth;
        for (ch, class) in text.chars().zip(classes.iter()) {
            if *class != CharClass::Code {
                continue;
            }
            match ch {
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth -= 1,
                _ => {}
            }
        }
        (before, self.depth)
    }
}

/// Result of one instrumentation pass.
#[derive(Debug)]
pub struct InstrumentedOutput {
    /// Output lines, terminators stripped.
    pub lines: Vec<String>,
    /// Number of instrumented source lines.
    pub injected: usize,
    pub newline: Newline,
    pub trailing_newline: bool,
    /// None until the external validator reports a verdict.
    pub validated: Option<bool>,
}

impl InstrumentedOutput {
    /// Record the external syntax-validity verdict.
    pub fn mark_validated(&mut self, ok: bool) {
        self.validated = Some(ok);
    }

    /// Render under the input's line-terminator convention.
    pub fn text(&self) -> String {
        let sep = self.newline.as_str();
        let mut out = self.lines.join(sep);
        if self.trailing_newline && !self.lines.is_empty() {
            out.push_str(sep);
        }
        out
    }
}
