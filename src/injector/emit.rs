use crate::sink::SinkSpec;

/// Sink call placed immediately before an eligible line, at the line's
/// exact indentation. `line_number` is 1-based in the original input.
pub fn prefix_call(indent: &str, line_number: usize, sink: &SinkSpec) -> String {
    format!("{indent}{}({line_number}, {})", sink.name, sink.bindings)
}

/// Wrap a single complete statement in a recoverable scope: the original
/// line one unit deeper inside `try:`, and a handler that reports the
/// failure to the sink and swallows it.
pub fn guard_wrap(
    out: &mut Vec<String>,
    indent: &str,
    line: &str,
    line_number: usize,
    indent_unit: usize,
    sink: &SinkSpec,
) {
    let pad = " ".repeat(indent_unit);
    let body = &line[indent.len()..];
    out.push(format!("{indent}try:"));
    out.push(format!("{indent}{pad}{body}"));
    out.push(format!("{indent}except Exception as exc:"));
    out.push(format!("{indent}{pad}{}({line_number}, exc)", sink.name));
}
