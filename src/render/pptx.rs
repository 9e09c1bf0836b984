/// Deck to PresentationML rendering.
use std::path::Path;

use super::Render;
use crate::common::{Error, Result};
use crate::ooxml;
use crate::ooxml::inspect::inspect_pptx;
use crate::ooxml::pptx::{Package, SlideLayout};
use crate::outline::{Deck, Slide};

/// Build the .pptx package for `deck`, one slide per deck slide.
pub fn build_package(deck: &Deck) -> ooxml::Result<Package> {
    let mut pkg = Package::new(deck.title());
    let pres = pkg.presentation_mut();

    for slide in deck.slides() {
        let layout = match slide {
            Slide::Title { .. } => SlideLayout::TitleSlide,
            Slide::Content { .. } => SlideLayout::TitleAndContent,
        };
        let target = pres.add_slide(layout);
        target.set_title(slide.title());

        let body = target.body_mut();
        for (level, text) in slide.body_paragraphs() {
            body.add_paragraph(text, level);
        }
    }

    log::debug!("built deck '{}' with {} slides", deck.title(), pres.slide_count());
    Ok(pkg)
}

impl Render for Deck {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(build_package(self)?.to_bytes()?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        build_package(self)?.save(path)?;
        Ok(())
    }

    fn verify(&self, path: &Path) -> Result<()> {
        let summary = inspect_pptx(path)?;
        let expected = self.len();
        let found = summary.slide_count();
        if expected != found {
            return Err(Error::Verification {
                file: path.display().to_string(),
                what: "slides",
                expected,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::inspect::inspect_pptx_bytes;
    use crate::outline::{DeckBuilder, Item};

    fn sample_deck() -> Deck {
        DeckBuilder::new("Deck")
            .title_slide("Eindpresentatie", "Ondertitel\n\nStijn")
            .content_slide("Agenda", ["Context", "Vragen"])
            .content_slide(
                "Techniek",
                [Item::nested("Oplossing:", ["Database per tenant", "ULID extern"])],
            )
            .build()
    }

    #[test]
    fn test_slide_layouts_and_titles() {
        let summary = inspect_pptx_bytes(sample_deck().to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 3);
        assert!(summary.slides[0].is_title_slide);
        assert!(!summary.slides[1].is_title_slide);
        assert_eq!(summary.slides[1].title, "Agenda");
        assert_eq!(summary.slide_size, (9_144_000, 6_858_000));
    }

    #[test]
    fn test_nested_items_keep_levels() {
        let summary = inspect_pptx_bytes(sample_deck().to_bytes().unwrap()).unwrap();
        let levels: Vec<u8> = summary.slides[2].paragraphs.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![0, 1, 1]);
        assert_eq!(summary.slides[2].paragraphs[1].1, "Database per tenant");
    }

    #[test]
    fn test_subtitle_lines_become_paragraphs() {
        let pkg = build_package(&sample_deck()).unwrap();
        let subtitle = pkg.presentation().slides()[0].body();
        assert_eq!(subtitle.paragraphs().len(), 3);
        assert_eq!(subtitle.text(), "Ondertitel\n\nStijn");
    }

    #[test]
    fn test_empty_deck() {
        let deck = DeckBuilder::new("Leeg").build();
        let summary = inspect_pptx_bytes(deck.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 0);
    }

    #[test]
    fn test_control_character_in_slide_rejected() {
        let deck = DeckBuilder::new("Deck").content_slide("Agenda\u{8}", ["Context"]).build();
        assert!(matches!(deck.to_bytes(), Err(Error::InvalidFormat(_))));
    }
}
