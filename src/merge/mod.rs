//! Sentinel-marker section merge.
//!
//! The target document owns everything outside the markers; the span from
//! the start marker through the end marker (inclusive) belongs to this tool
//! and is rewritten wholesale on every run. Merging the same block twice is
//! byte-identical, so change detection reduces to a string comparison.

pub const START_MARKER: &str = "<!-- HASHNODE_POSTS:START -->";
pub const END_MARKER: &str = "<!-- HASHNODE_POSTS:END -->";

/// Assemble the full owned section: start marker, optional heading, rendered
/// block, end marker.
pub fn build_section(block: &str, section_title: &str) -> String {
    let mut section = String::new();
    section.push_str(START_MARKER);
    section.push('\n');
    if !section_title.is_empty() {
        section.push_str("## ");
        section.push_str(section_title);
        section.push_str("\n\n");
    }
    section.push_str(block);
    section.push('\n');
    section.push_str(END_MARKER);
    section
}

/// Splice `block` into `existing` between the sentinel markers.
///
/// Replaces the first marker pair when one exists; otherwise appends the
/// section to the end of the document.
pub fn merge(existing: &str, block: &str, section_title: &str) -> String {
    let section = build_section(block, section_title);

    match find_span(existing) {
        Some((start, end)) => {
            let mut out = String::with_capacity(existing.len() + section.len());
            out.push_str(&existing[..start]);
            out.push_str(&section);
            out.push_str(&existing[end..]);
            out
        }
        None => {
            let mut out = String::with_capacity(existing.len() + section.len() + 3);
            out.push_str(existing);
            out.push_str("\n\n");
            out.push_str(&section);
            out.push('\n');
            out
        }
    }
}

/// Locate the owned span: the first start marker and the first end marker
/// after it. A start marker with no end marker following it counts as
/// "markers absent".
fn find_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find(START_MARKER)?;
    let search_from = start + START_MARKER.len();
    let end_rel = text[search_from..].find(END_MARKER)?;
    Some((start, search_from + end_rel + END_MARKER.len()))
}
