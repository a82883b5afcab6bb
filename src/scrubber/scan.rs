use tracing::debug;

use super::types::{CharClass, LineScan, ScanState, StringDelim};
use crate::source::split_lines;

/// Single-pass lexical scanner over source lines.
///
/// Classifies every character as code, comment, string or multi-line string
/// data, and reports per-line flags for the injector. State advances left to
/// right, top to bottom, and is never rewound. Malformed input never raises:
/// an unterminated string simply leaves the scanner inside it, which makes
/// the remaining lines ineligible for injection.
pub struct Scrubber {
    state: ScanState,
}

impl Scrubber {
    pub fn new() -> Self {
        Self {
            state: ScanState::new(),
        }
    }

    /// True while a triple-quoted string is open across lines.
    pub fn in_multiline_string(&self) -> bool {
        self.state.delim.is_triple()
    }

    /// Scan one physical line (terminator already stripped).
    pub fn scan_line(&mut self, line: &str) -> LineScan {
        let chars: Vec<char> = line.chars().collect();
        let starts_inside = self.state.delim.is_triple();

        let mut classes = Vec::with_capacity(chars.len());
        let mut scrubbed = String::with_capacity(line.len());

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];

            if self.state.in_comment {
                classes.push(CharClass::Comment);
                scrubbed.push(ch);
                i += 1;
                continue;
            }

            match self.state.delim {
                StringDelim::TripleSingle | StringDelim::TripleDouble => {
                    let q = self.state.delim.quote().unwrap_or('"');
                    let keep = self.state.preserve;
                    let class = if keep {
                        CharClass::MultiData
                    } else {
                        CharClass::Stripped
                    };
                    if ch == q && chars.get(i + 1) == Some(&q) && chars.get(i + 2) == Some(&q) {
                        // Closing delimiter, consumed atomically.
                        for _ in 0..3 {
                            classes.push(class);
                            if keep {
                                scrubbed.push(q);
                            }
                        }
                        self.state.delim = StringDelim::None;
                        i += 3;
                    } else {
                        classes.push(class);
                        if keep {
                            scrubbed.push(ch);
                        }
                        i += 1;
                    }
                }
                StringDelim::Single | StringDelim::Double => {
                    let q = self.state.delim.quote().unwrap_or('"');
                    classes.push(CharClass::Str);
                    scrubbed.push(ch);
                    // A quote right after a backslash does not close the
                    // string. Only one preceding character is examined, so an
                    // escaped backslash before a quote reads as still-escaped.
                    if ch == q && (i == 0 || chars[i - 1] != '\\') {
                        self.state.delim = StringDelim::None;
                    }
                    i += 1;
                }
                StringDelim::None => {
                    if ch == '#' {
                        self.state.in_comment = true;
                        classes.push(CharClass::Comment);
                        scrubbed.push(ch);
                        i += 1;
                    } else if ch == '"' || ch == '\'' {
                        if chars.get(i + 1) == Some(&ch) && chars.get(i + 2) == Some(&ch) {
                            // Triple-quoted run opens. It is worth keeping
                            // only as the right-hand side of an assignment;
                            // anything else is a docstring to drop.
                            let preserve = self.state.last_significant == Some('=');
                            debug!(preserve, "triple-quoted string opened");
                            self.state.preserve = preserve;
                            self.state.delim = if ch == '"' {
                                StringDelim::TripleDouble
                            } else {
                                StringDelim::TripleSingle
                            };
                            let class = if preserve {
                                CharClass::MultiData
                            } else {
                                CharClass::Stripped
                            };
                            for _ in 0..3 {
                                classes.push(class);
                                if preserve {
                                    scrubbed.push(ch);
                                }
                            }
                            i += 3;
                        } else {
                            self.state.delim = if ch == '"' {
                                StringDelim::Double
                            } else {
                                StringDelim::Single
                            };
                            classes.push(CharClass::Str);
                            scrubbed.push(ch);
                            i += 1;
                        }
                    } else {
                        classes.push(CharClass::Code);
                        scrubbed.push(ch);
                        if !ch.is_whitespace() {
                            self.state.last_significant = Some(ch);
                        }
                        i += 1;
                    }
                }
            }
        }

        let ends_inside = self.state.delim.is_triple();

        // End-of-line transitions: comments never span lines, and neither do
        // single/double-quoted strings (unterminated ones close here,
        // fail-open).
        self.state.in_comment = false;
        if matches!(self.state.delim, StringDelim::Single | StringDelim::Double) {
            debug!("string still open at end of line, closing");
            self.state.delim = StringDelim::None;
        }

        LineScan {
            text: scrubbed,
            starts_inside,
            toggles: starts_inside != ends_inside,
            classes,
        }
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a whole file and return the per-line results.
pub fn scrub(text: &str) -> Vec<LineScan> {
    let mut scrubber = Scrubber::new();
    split_lines(text)
        .iter()
        .map(|l| scrubber.scan_line(&l.text))
        .collect()
}
