//! Shared formatting types for DOCX (used in both writing and inspection).

use crate::outline::Alignment;

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    /// Value of the `w:jc` element.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }

    /// Parse a `w:jc` value. `start`/`end` are the bidi-aware aliases.
    pub(crate) fn from_xml(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" | "distribute" => Some(Self::Justify),
            _ => None,
        }
    }
}

impl From<Alignment> for ParagraphAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::Right => Self::Right,
            Alignment::Justify => Self::Justify,
        }
    }
}

impl From<ParagraphAlignment> for Alignment {
    fn from(alignment: ParagraphAlignment) -> Self {
        match alignment {
            ParagraphAlignment::Left => Self::Left,
            ParagraphAlignment::Center => Self::Center,
            ParagraphAlignment::Right => Self::Right,
            ParagraphAlignment::Justify => Self::Justify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_xml_values() {
        assert_eq!(ParagraphAlignment::Justify.as_str(), "both");
        assert_eq!(ParagraphAlignment::from_xml("both"), Some(ParagraphAlignment::Justify));
        assert_eq!(ParagraphAlignment::from_xml("start"), Some(ParagraphAlignment::Left));
        assert_eq!(ParagraphAlignment::from_xml("bogus"), None);
        assert_eq!(
            ParagraphAlignment::from(Alignment::Center),
            ParagraphAlignment::Center
        );
    }
}
