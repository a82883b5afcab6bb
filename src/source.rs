/// Line-terminator convention of one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    /// A single CRLF anywhere makes the whole file CRLF.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Newline::CrLf
        } else {
            Newline::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// One physical input line, terminator stripped.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub index: usize,
    pub text: String,
}

impl SourceLine {
    /// 1-based line number as generated statements must report it.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Leading whitespace width: a space counts 1, a tab counts one full unit.
    pub fn indent_width(&self, indent_unit: usize) -> usize {
        leading_whitespace(&self.text)
            .chars()
            .map(|c| if c == '\t' { indent_unit } else { 1 })
            .sum()
    }

    pub fn indent_depth(&self, indent_unit: usize) -> usize {
        self.indent_width(indent_unit) / indent_unit.max(1)
    }
}

/// The whitespace prefix of a line.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}

/// Split into physical lines. Handles both LF and CRLF input.
pub fn split_lines(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .map(|(index, l)| SourceLine {
            index,
            text: l.to_string(),
        })
        .collect()
}

pub fn has_trailing_newline(text: &str) -> bool {
    text.ends_with('\n')
}
