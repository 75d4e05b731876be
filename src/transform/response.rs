//! Splits a free-text model reply into the three labeled sections.
//!
//! Label grammar: a section starts at a line whose first token is the next
//! ascending numeral marker `1.`, `2.`, or `3.` (a closing parenthesis is
//! accepted in place of the dot, and markdown decoration such as `**1.**` is
//! tolerated). The section body runs until the next recognized marker and
//! may span multiple lines. Markers must appear in ascending order; a
//! numeral that does not advance the sequence is treated as body text.
//!
//! Splitting never fails. Sections absent from the reply stay empty and the
//! caller receives a [`PartialReply`] warning instead of an error, so a
//! truncated or malformed reply degrades field-by-field rather than sinking
//! the whole submission.

use crate::transform::types::{ConversionResult, PartialReply, Section, Transformation};

/// Split a model reply into a [`ConversionResult`].
///
/// Re-parsing a well-formed [`ConversionResult::to_numbered_block`] rendering
/// reproduces the same result.
#[must_use]
pub fn split_reply(reply: &str) -> Transformation {
    let mut result = ConversionResult::default();
    let mut current: Option<Section> = None;
    let mut last_number = 0_usize;

    for line in reply.lines() {
        if let Some((number, rest)) = section_marker(line) {
            if number > last_number {
                last_number = number;
                current = Section::from_number(number);
                if let Some(section) = current {
                    result.field_mut(section).push_str(rest.trim());
                }
                continue;
            }
        }

        if let Some(section) = current {
            let field = result.field_mut(section);
            if !field.is_empty() {
                field.push('\n');
            }
            field.push_str(line.trim_end());
        }
    }

    for section in Section::ALL {
        let field = result.field_mut(section);
        let trimmed = field.trim().to_string();
        *field = trimmed;
    }

    let missing = result.missing_sections();
    let warning = if missing.is_empty() {
        None
    } else {
        Some(PartialReply { missing })
    };

    Transformation { result, warning }
}

/// Recognize a section marker at the start of a line.
///
/// Returns the one-based section number and the remainder of the line after
/// the marker.
fn section_marker(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let trimmed = trimmed.trim_start_matches(['*', '#', '_']).trim_start();

    let mut chars = trimmed.chars();
    let number = chars.next()?.to_digit(10)? as usize;
    if !(1..=3).contains(&number) {
        return None;
    }
    if !matches!(chars.next(), Some('.' | ')')) {
        return None;
    }

    let rest = chars.as_str().trim_start_matches(['*', '_']);
    Some((number, rest))
}
