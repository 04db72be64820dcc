//! Whitespace normalization of rendered units.
//!
//! Stands in for the external formatting collaborator: collapses runs of
//! blank lines to a single blank line, strips trailing whitespace, and
//! trims leading/trailing blank lines. Never touches token content.

/// Normalize rendered source text. Idempotent.
#[must_use]
pub fn format_source(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_blank = false;

    for line in raw.lines() {
        let line = line.trim_end();

        if line.is_empty() {
            // Leading blanks are dropped outright; interior runs collapse
            // to one once the next content line arrives.
            pending_blank = !out.is_empty();
            continue;
        }

        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(format_source("a\n\n\n\nb\n"), "a\n\nb\n");
    }

    #[test]
    fn trims_leading_and_trailing_blanks() {
        assert_eq!(format_source("\n\na\nb\n\n\n"), "a\nb\n");
    }

    #[test]
    fn strips_trailing_whitespace_per_line() {
        assert_eq!(format_source("a   \n    \nb\n"), "a\n\nb\n");
    }

    #[test]
    fn ensures_single_trailing_newline() {
        assert_eq!(format_source("a"), "a\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_source(""), "");
        assert_eq!(format_source("\n\n"), "");
    }

    #[test]
    fn is_idempotent() {
        let once = format_source("  \na\n\n\nb   \n\n");
        assert_eq!(format_source(&once), once);
    }
}
