use serde::Deserialize;

/// Session-scoped gates baked into the generated preamble. Decided once by
/// the orchestrator at sink construction time; the generated code carries no
/// ambient mutable globals of its own.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Master gate: a disabled sink returns immediately.
    pub enabled: bool,
    /// Whether the sink prints the variable bindings it receives.
    pub show_vars: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_vars: true,
        }
    }
}

/// The external function generated statements call. The name and bindings
/// expression are spliced verbatim into generated lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkSpec {
    pub name: String,
    /// Argument expression for the locally visible bindings.
    pub bindings: String,
    /// Emit a preamble defining the sink at the top of the output.
    pub emit_preamble: bool,
    pub config: SinkConfig,
}

impl Default for SinkSpec {
    fn default() -> Self {
        Self {
            name: "_instrument_log".to_string(),
            bindings: "locals()".to_string(),
            emit_preamble: false,
            config: SinkConfig::default(),
        }
    }
}

fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Render the sink definition spliced at the top of instrumented output.
///
/// Accepts either a bindings dict (prefix calls pass `locals()`) or an
/// exception instance (guard handlers pass the caught value).
pub fn render_preamble(sink: &SinkSpec) -> Vec<String> {
    let mut out = Vec::new();
    out.push("# ------------------------------------------------".to_string());
    out.push("# instrumentation preamble (generated)".to_string());
    out.push("# ------------------------------------------------".to_string());
    out.push(format!("_INSTRUMENT_ENABLED = {}", py_bool(sink.config.enabled)));
    out.push(format!(
        "_INSTRUMENT_SHOW_VARS = {}",
        py_bool(sink.config.show_vars)
    ));
    out.push(String::new());
    out.push(format!("def {}(line_num, payload):", sink.name));
    out.push("    if not _INSTRUMENT_ENABLED:".to_string());
    out.push("        return".to_string());
    out.push("    print(f\"[trace] line {line_num}\")".to_string());
    out.push("    if not _INSTRUMENT_SHOW_VARS:".to_string());
    out.push("        return".to_string());
    out.push("    if isinstance(payload, dict):".to_string());
    out.push("        shown = {k: repr(v) for k, v in payload.items()".to_string());
    out.push(format!(
        "                 if not k.startswith('_') and k != '{}'}}",
        sink.name
    ));
    out.push("        if shown:".to_string());
    out.push("            print(f\"    vars: {shown}\")".to_string());
    out.push("    else:".to_string());
    out.push("        print(f\"    error: {payload!r}\")".to_string());
    out.push("# ------------------------------------------------".to_string());
    out.push(String::new());
    out
}
