use py_instrumenter::scrubber::{scrub, CharClass, Scrubber};

#[cfg(test)]
mod scrubber_tests {
    use super::*;

    #[test]
    fn test_idempotent_classification() {
        let src = "import os\nx = 1  # note\ns = \"a(b\"\ndata = \"\"\"kept\nend\"\"\"\n\"\"\"dropped\"\"\"\n";
        let first = scrub(src);
        let second = scrub(src);
        assert_eq!(first, second, "scanning twice must give identical results");
    }

    #[test]
    fn test_comment_chars_classified() {
        let scans = scrub("x = 1  # trailing ( comment\n");
        let line = &scans[0];
        assert_eq!(line.classes[7], CharClass::Comment, "hash starts the comment");
        assert!(
            line.classes[7..].iter().all(|c| *c == CharClass::Comment),
            "everything after the hash is comment content"
        );
        assert!(
            line.classes[..7].iter().all(|c| *c == CharClass::Code),
            "everything before the hash is code"
        );
        assert_eq!(line.text, "x = 1  # trailing ( comment");
    }

    #[test]
    fn test_string_chars_classified() {
        // s = "a(b"
        let scans = scrub("s = \"a(b\"\n");
        let line = &scans[0];
        assert!(line.classes[..4].iter().all(|c| *c == CharClass::Code));
        assert!(
            line.classes[4..9].iter().all(|c| *c == CharClass::Str),
            "delimiters and contents are string-classified"
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        // s = "a\"b" + z
        let scans = scrub("s = \"a\\\"b\" + z\n");
        let line = &scans[0];
        assert_eq!(line.classes[7], CharClass::Str, "escaped quote stays inside");
        assert_eq!(line.classes[9], CharClass::Str, "real closing quote");
        assert_eq!(line.classes[11], CharClass::Code, "code resumes after close");
        assert_eq!(line.classes[13], CharClass::Code);
    }

    #[test]
    fn test_backslash_backslash_quote_limitation() {
        // p = "C:\\" + q
        // The scanner checks one preceding character only, so the quote after
        // an escaped backslash is read as still-escaped and the string stays
        // open to end of line.
        let scans = scrub("p = \"C:\\\\\" + q\n");
        let line = &scans[0];
        assert_eq!(
            line.classes[11],
            CharClass::Str,
            "rest of line is swallowed by the open string"
        );
    }

    #[test]
    fn test_triple_preserved_on_assignment() {
        let scans = scrub("x = \"\"\"data\nmore\"\"\"\n");
        assert!(scans[0].toggles, "opening line toggles multi-line state");
        assert!(!scans[0].starts_inside);
        assert_eq!(scans[0].text, "x = \"\"\"data", "assigned literal is kept");
        assert!(scans[1].starts_inside);
        assert!(scans[1].toggles, "closing line toggles back");
        assert_eq!(scans[1].text, "more\"\"\"");
    }

    #[test]
    fn test_docstring_stripped() {
        let scans = scrub("def f():\n    \"\"\"doc\n    body\n    \"\"\"\n    return 1\n");
        assert!(scans[1].toggles);
        assert_eq!(scans[1].text, "    ", "docstring chars dropped, indent kept");
        assert!(scans[2].starts_inside);
        assert_eq!(scans[2].text, "", "interior line dropped entirely");
        assert!(scans[3].toggles);
        assert_eq!(scans[3].text, "");
        assert_eq!(scans[4].text, "    return 1");
    }

    #[test]
    fn test_single_line_docstring_stripped() {
        let scans = scrub("\"\"\"module doc\"\"\"\nx = 1\n");
        assert_eq!(scans[0].text, "", "bare docstring dropped");
        assert!(!scans[0].toggles, "opens and closes on the same line");
        assert_eq!(scans[1].text, "x = 1");
    }

    #[test]
    fn test_triple_in_call_is_stripped() {
        // Not the right-hand side of an assignment, so not preserved.
        let scans = scrub("foo(\"\"\"arg\"\"\")\n");
        assert_eq!(scans[0].text, "foo()");
    }

    #[test]
    fn test_unterminated_string_fail_open() {
        let scans = scrub("x = \"abc\ny = 2\n");
        assert!(
            scans[0].classes[4..].iter().all(|c| *c == CharClass::Str),
            "open string runs to end of line"
        );
        assert!(
            scans[1].classes.iter().all(|c| *c == CharClass::Code),
            "next line scans clean after fail-open close"
        );
    }

    #[test]
    fn test_unterminated_triple_fail_open() {
        let mut scrubber = Scrubber::new();
        let first = scrubber.scan_line("\"\"\"never closed");
        let second = scrubber.scan_line("still inside");
        assert!(first.toggles);
        assert!(second.starts_inside);
        assert!(
            scrubber.in_multiline_string(),
            "scanner stays inside the string instead of erroring"
        );
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        let scans = scrub("tag = \"#anchor\"\n");
        let line = &scans[0];
        assert!(line.classes.iter().all(|c| *c != CharClass::Comment));
        assert_eq!(line.text, "tag = \"#anchor\"");
    }
}
