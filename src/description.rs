//! Managed tracking block in a pull request description
//!
//! The PR body owns a single delimited block carrying a link back to the
//! tracking note. [`merge_tracking_block`] rewrites that block in place, or
//! prepends it when absent. Pure and idempotent so the CI job can run on
//! every push without growing the description.

use std::ops::Range;

/// Opening marker of the managed block
pub const BLOCK_START: &str = "<notionbot>";
/// Closing marker of the managed block
pub const BLOCK_END: &str = "</notionbot>";

/// Render the managed block for a tracking note URL
fn build_block(tracking_url: &str) -> String {
    format!("{BLOCK_START}\n\n  [Notion Ticket]({tracking_url})\n\n  <hr/>\n{BLOCK_END}\n")
}

/// Locate the first well-formed marker pair in `body`
///
/// Markers are matched case-insensitively and may be separated by any text,
/// including line breaks. The span runs from the start marker through the end
/// marker, plus one immediately following newline when present (the newline
/// the block template itself emits), so that replacing the span with a fresh
/// block is byte-stable. A start marker with no later end marker is not a
/// block. Duplicate markers after the first pair are left to the caller.
fn find_block(body: &str) -> Option<Range<usize>> {
    let haystack = body.to_ascii_lowercase();
    let start = haystack.find(BLOCK_START)?;
    let after_start = start + BLOCK_START.len();
    let end_offset = haystack[after_start..].find(BLOCK_END)?;
    let mut end = after_start + end_offset + BLOCK_END.len();
    if body[end..].starts_with('\n') {
        end += 1;
    }
    Some(start..end)
}

/// Merge the tracking link into a pull request body
///
/// Replaces the existing managed block when one is present, otherwise
/// prepends a new one; everything outside the block is left untouched. An
/// absent body is treated as empty. Idempotent:
/// `merge_tracking_block(Some(&merged), url)` returns `merged` again.
pub fn merge_tracking_block(existing_body: Option<&str>, tracking_url: &str) -> String {
    let body = existing_body.unwrap_or("");
    let block = build_block(tracking_url);

    find_block(body).map_or_else(
        || format!("{block}{body}"),
        |span| format!("{}{}{}", &body[..span.start], block, &body[span.end..]),
    )
}
