//! Prompt construction for the three-way transformation.
//!
//! The instruction template pins down a concrete output grammar so that
//! [`crate::transform::response::split_reply`] can segment the reply
//! deterministically: the model must answer with exactly three numbered
//! sections, `1.` through `3.`, in a fixed order, and nothing else.

use crate::transform::errors::{TransformError, TransformResult};

/// System preamble establishing the output grammar the splitter expects.
pub const TRANSFORM_PREAMBLE: &str = "You convert English text into three Hindi-related renditions.
Always answer with exactly three numbered sections and nothing else:
1. The English text transliterated into Devanagari script (English sounds written with Devanagari letters).
2. The Hindi translation, in Devanagari script, with natural grammar and the original tone.
3. The same Hindi translation written in Roman script (romanized Hindi).
Keep the line breaks of the source text inside each section.
Do not add explanations, headings, or commentary.";

/// Build the user prompt for a submission.
///
/// The returned prompt always contains `input` verbatim as a substring.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`] when the input is empty or
/// whitespace-only; the caller must not invoke the model in that case.
pub fn build_prompt(input: &str) -> TransformResult<String> {
    if input.trim().is_empty() {
        return Err(TransformError::EmptyInput);
    }

    Ok(format!("Convert the following English text:\n\n{input}"))
}
