mod eligibility;
mod emit;
mod types;

use tracing::{debug, warn};

pub use types::{InjectionPolicy, InstrumentedOutput, NestingState, SelectionMode, WrapStyle};

use crate::error::InstrumentError;
use crate::scrubber::{LineScan, Scrubber};
use crate::sink::{render_preamble, SinkSpec};
use crate::source::{has_trailing_newline, leading_whitespace, split_lines, Newline, SourceLine};

/// Instrument one file's worth of source text.
///
/// Errors only on a misconfigured policy. Lexically malformed input never
/// fails: the scanner degrades by treating the rest of the file as string
/// content, which suppresses injection there.
pub fn instrument_source(
    source: &str,
    policy: &InjectionPolicy,
    sink: &SinkSpec,
) -> Result<InstrumentedOutput, InstrumentError> {
    policy.validate()?;

    let newline = Newline::detect(source);
    let lines = split_lines(source);

    let mut scrubber = Scrubber::new();
    let mut nesting = NestingState::new();
    let mut inside_multiline = false;

    let mut out: Vec<String> = Vec::new();
    let mut injected = 0usize;

    if sink.emit_preamble {
        debug!(sink = %sink.name, "emitting sink preamble");
        out.extend(render_preamble(sink));
    }

    for line in &lines {
        let scan = scrubber.scan_line(&line.text);
        let (depth_before, depth_after) = nesting.apply_line(&line.text, &scan.classes);

        // Multi-line string tracking: toggled by the scrubber's per-line
        // odd-delimiter flag. The flag for this line reflects the state the
        // line STARTED in.
        let was_inside = inside_multiline;
        if scan.toggles {
            inside_multiline = !inside_multiline;
        }

        if !should_inject(line, &scan, policy, depth_before, depth_after, was_inside) {
            out.push(scan.text.clone());
            continue;
        }

        let indent = leading_whitespace(&scan.text);
        match policy.wrap_style {
            WrapStyle::PrefixCall => {
                out.push(emit::prefix_call(indent, line.number(), sink));
                out.push(scan.text.clone());
            }
            WrapStyle::GuardWrap => {
                emit::guard_wrap(
                    &mut out,
                    indent,
                    &scan.text,
                    line.number(),
                    policy.indent_unit,
                    sink,
                );
            }
        }
        injected += 1;
    }

    if scrubber.in_multiline_string() {
        warn!("unterminated multi-line string at end of file; trailing lines left uninstrumented");
    }
    if nesting.depth() != 0 {
        warn!(depth = nesting.depth(), "unbalanced brackets at end of file");
    }
    debug!(injected, total = lines.len(), "instrumentation pass complete");

    Ok(InstrumentedOutput {
        lines: out,
        injected,
        newline,
        trailing_newline: has_trailing_newline(source),
        validated: None,
    })
}

/// The full insertion-safety predicate. Any doubt resolves to "do not
/// inject".
fn should_inject(
    line: &SourceLine,
    scan: &LineScan,
    policy: &InjectionPolicy,
    depth_before: i32,
    depth_after: i32,
    inside_multiline: bool,
) -> bool {
    let stripped = scan.text.trim();

    // Blank, comment-only and decorator lines.
    if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with('@') {
        return false;
    }

    // Inside a multi-line string, or on a line where one opens or closes.
    if inside_multiline || scan.toggles {
        return false;
    }
    if stripped.starts_with("\"\"\"") || stripped.starts_with("'''") {
        return false;
    }

    // Never split a bracketed expression. A prefix call only needs a
    // statement boundary before the line; a wrap needs the statement
    // complete on the line.
    if depth_before != 0 {
        return false;
    }
    if policy.wrap_style == WrapStyle::GuardWrap && depth_after != 0 {
        return false;
    }

    let code = eligibility::code_text(&line.text, &scan.classes);
    let code_stripped = code.trim();

    if eligibility::is_structural(stripped, code_stripped) {
        return false;
    }
    if eligibility::is_continuation(stripped) {
        return false;
    }
    if eligibility::is_closing_only(code_stripped) {
        return false;
    }

    if line.indent_depth(policy.indent_unit) > policy.max_indent_depth {
        return false;
    }

    if policy.selection_mode == SelectionMode::Marked && !scan.text.contains(&policy.marker) {
        return false;
    }

    true
}
