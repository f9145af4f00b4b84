//! Textual diff rendering
//!
//! Line matching is delegated to `similar` (Myers); this module only lays
//! the grouped edit operations out in the classic unified and context
//! formats.

use similar::{Algorithm, DiffOp, DiffTag, capture_diff_slices, group_diff_ops};
use std::ops::Range;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file\n";
const CONTEXT_HUNK_SEPARATOR: &str = "***************\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffFormat {
    Unified,
    Context,
}

/// Render the difference between `old` and `new` (lines keep their endings).
///
/// Identical inputs render as an empty string, without file headers.
pub fn render(
    format: DiffFormat,
    old: &[String],
    new: &[String],
    from_label: &str,
    to_label: &str,
    context_lines: usize,
) -> String {
    let ops = capture_diff_slices(Algorithm::Myers, old, new);
    let hunks = group_diff_ops(ops, context_lines);
    if hunks.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    match format {
        DiffFormat::Unified => {
            out.push_str(&format!("--- {from_label}\n+++ {to_label}\n"));
            for hunk in &hunks {
                write_unified_hunk(&mut out, hunk, old, new);
            }
        }
        DiffFormat::Context => {
            out.push_str(&format!("*** {from_label}\n--- {to_label}\n"));
            for hunk in &hunks {
                write_context_hunk(&mut out, hunk, old, new);
            }
        }
    }
    out
}

fn write_unified_hunk(out: &mut String, hunk: &[DiffOp], old: &[String], new: &[String]) {
    let (old_span, new_span) = spans(hunk);
    out.push_str(&format!(
        "@@ -{} +{} @@\n",
        unified_range(&old_span),
        unified_range(&new_span)
    ));

    for op in hunk {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_lines(out, " ", &old[old_range]),
            DiffTag::Delete => push_lines(out, "-", &old[old_range]),
            DiffTag::Insert => push_lines(out, "+", &new[new_range]),
            DiffTag::Replace => {
                push_lines(out, "-", &old[old_range]);
                push_lines(out, "+", &new[new_range]);
            }
        }
    }
}

fn write_context_hunk(out: &mut String, hunk: &[DiffOp], old: &[String], new: &[String]) {
    let (old_span, new_span) = spans(hunk);
    let has = |tags: [DiffTag; 2]| hunk.iter().any(|op| tags.contains(&op.tag()));

    out.push_str(CONTEXT_HUNK_SEPARATOR);
    out.push_str(&format!("*** {} ****\n", context_range(&old_span)));
    if has([DiffTag::Delete, DiffTag::Replace]) {
        for op in hunk {
            let (tag, old_range, _) = op.as_tag_tuple();
            if tag != DiffTag::Insert {
                push_lines(out, context_prefix(tag), &old[old_range]);
            }
        }
    }

    out.push_str(&format!("--- {} ----\n", context_range(&new_span)));
    if has([DiffTag::Insert, DiffTag::Replace]) {
        for op in hunk {
            let (tag, _, new_range) = op.as_tag_tuple();
            if tag != DiffTag::Delete {
                push_lines(out, context_prefix(tag), &new[new_range]);
            }
        }
    }
}

/// Old and new line ranges covered by a whole hunk.
fn spans(hunk: &[DiffOp]) -> (Range<usize>, Range<usize>) {
    match (hunk.first(), hunk.last()) {
        (Some(first), Some(last)) => (
            first.old_range().start..last.old_range().end,
            first.new_range().start..last.new_range().end,
        ),
        _ => (0..0, 0..0),
    }
}

fn unified_range(span: &Range<usize>) -> String {
    let length = span.len();
    let start = span.start + 1;
    match length {
        1 => start.to_string(),
        0 => format!("{},0", start - 1),
        _ => format!("{start},{length}"),
    }
}

fn context_range(span: &Range<usize>) -> String {
    let length = span.len();
    let start = if length == 0 {
        span.start
    } else {
        span.start + 1
    };
    if length <= 1 {
        start.to_string()
    } else {
        format!("{start},{}", start + length - 1)
    }
}

fn context_prefix(tag: DiffTag) -> &'static str {
    match tag {
        DiffTag::Equal => "  ",
        DiffTag::Delete => "- ",
        DiffTag::Insert => "+ ",
        DiffTag::Replace => "! ",
    }
}

fn push_lines(out: &mut String, prefix: &str, lines: &[String]) {
    for line in lines {
        out.push_str(prefix);
        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
            out.push_str(NO_NEWLINE_MARKER);
        }
    }
}
