/// Errors an instrumentation pass can surface to the orchestrator.
///
/// Lexical trouble (unterminated strings, ambiguous nesting) is not here:
/// the scanner recovers fail-open and the eligibility predicate resolves
/// doubt to "do not inject".
#[derive(Debug, thiserror::Error)]
pub enum InstrumentError {
    /// The external validator rejected the generated output. The original
    /// file must be left unmodified by the caller.
    #[error("{file}: instrumented output failed syntax check at line {line}: {cause}")]
    PostInjectionSyntaxInvalid {
        file: String,
        line: usize,
        cause: String,
    },

    #[error("marked selection mode requires a non-empty marker token")]
    EmptyMarker,

    #[error("indentation unit must be at least 1")]
    ZeroIndentUnit,
}
