//! Core types for transformation results.

use serde::{Deserialize, Serialize};

/// The three output sections, in the order the prompt requests them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// English sounds written in Devanagari script.
    DevanagariTransliteration,
    /// Hindi translation in Devanagari script.
    HindiDevanagari,
    /// Hindi translation in Roman script.
    HindiRoman,
}

impl Section {
    /// All sections in prompt order.
    pub const ALL: [Self; 3] = [
        Self::DevanagariTransliteration,
        Self::HindiDevanagari,
        Self::HindiRoman,
    ];

    /// One-based section number used by the output grammar.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::DevanagariTransliteration => 1,
            Self::HindiDevanagari => 2,
            Self::HindiRoman => 3,
        }
    }

    /// Section for a one-based number, if in range.
    #[must_use]
    pub const fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Self::DevanagariTransliteration),
            2 => Some(Self::HindiDevanagari),
            3 => Some(Self::HindiRoman),
            _ => None,
        }
    }

    /// Human-readable label for logs and the CLI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DevanagariTransliteration => "English in Devanagari",
            Self::HindiDevanagari => "Hindi in Devanagari",
            Self::HindiRoman => "Hindi in Roman script",
        }
    }
}

/// The three derived variants of one submission.
///
/// An empty string is the explicit "not found" value for a field; the UI
/// renders whatever was extracted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// English sounds written in Devanagari script.
    pub devanagari_transliteration: String,
    /// Hindi translation in Devanagari script.
    pub hindi_devanagari: String,
    /// Hindi translation in Roman script.
    pub hindi_roman: String,
}

impl ConversionResult {
    /// Borrow the field for a section.
    #[must_use]
    pub fn field(&self, section: Section) -> &str {
        match section {
            Section::DevanagariTransliteration => &self.devanagari_transliteration,
            Section::HindiDevanagari => &self.hindi_devanagari,
            Section::HindiRoman => &self.hindi_roman,
        }
    }

    /// Mutably borrow the field for a section.
    pub fn field_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::DevanagariTransliteration => &mut self.devanagari_transliteration,
            Section::HindiDevanagari => &mut self.hindi_devanagari,
            Section::HindiRoman => &mut self.hindi_roman,
        }
    }

    /// Sections whose fields are empty.
    #[must_use]
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .iter()
            .copied()
            .filter(|section| self.field(*section).is_empty())
            .collect()
    }

    /// Render the result back into the numbered three-section grammar.
    ///
    /// Re-parsing this output with [`crate::transform::response::split_reply`]
    /// reproduces the same result when all fields are non-empty.
    #[must_use]
    pub fn to_numbered_block(&self) -> String {
        format!(
            "1. {}\n2. {}\n3. {}",
            self.devanagari_transliteration, self.hindi_devanagari, self.hindi_roman
        )
    }
}

/// Non-fatal warning: the model reply had fewer than three sections.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PartialReply {
    /// Sections absent from the reply, in prompt order.
    pub missing: Vec<Section>,
}

impl PartialReply {
    /// Comma-separated labels of the missing sections, for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        self.missing
            .iter()
            .map(|section| section.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of one transformation: the extracted result plus an optional
/// degradation warning.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transformation {
    /// The three extracted fields (empty string where absent).
    pub result: ConversionResult,
    /// Present when fewer than three sections were found.
    pub warning: Option<PartialReply>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_numbers_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_number(section.number()), Some(section));
        }
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(4), None);
    }

    #[test]
    fn test_numbered_block_layout() {
        let result = ConversionResult {
            devanagari_transliteration: "हाउ आर यू?".to_string(),
            hindi_devanagari: "आप कैसे हैं?".to_string(),
            hindi_roman: "Aap kaise hain?".to_string(),
        };
        assert_eq!(
            result.to_numbered_block(),
            "1. हाउ आर यू?\n2. आप कैसे हैं?\n3. Aap kaise hain?"
        );
    }

    #[test]
    fn test_missing_sections() {
        let mut result = ConversionResult::default();
        assert_eq!(result.missing_sections(), Section::ALL.to_vec());

        result.hindi_devanagari = "आप कैसे हैं?".to_string();
        assert_eq!(
            result.missing_sections(),
            vec![Section::DevanagariTransliteration, Section::HindiRoman]
        );
    }

    #[test]
    fn test_partial_reply_describe() {
        let warning = PartialReply {
            missing: vec![Section::HindiRoman],
        };
        assert_eq!(warning.describe(), "Hindi in Roman script");
    }
}
