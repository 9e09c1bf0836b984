//! Slide decks.

/// One bullet on a content slide.
///
/// A `Nested` item renders its label at level 0 followed by each child at
/// level 1 of the same text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Plain(String),
    Nested(String, Vec<String>),
}

impl Item {
    pub fn plain(text: impl Into<String>) -> Self {
        Item::Plain(text.into())
    }

    pub fn nested<S: Into<String>>(
        label: impl Into<String>,
        children: impl IntoIterator<Item = S>,
    ) -> Self {
        Item::Nested(label.into(), children.into_iter().map(Into::into).collect())
    }

    /// Flatten into `(indent level, text)` pairs in render order.
    pub fn paragraphs(&self) -> Vec<(u8, &str)> {
        match self {
            Item::Plain(text) => vec![(0, text.as_str())],
            Item::Nested(label, children) => std::iter::once((0, label.as_str()))
                .chain(children.iter().map(|c| (1, c.as_str())))
                .collect(),
        }
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::plain(text)
    }
}

/// A single slide, either a title slide or a title-and-content slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    /// Uses the title layout. Each `'\n'` in the subtitle starts a new
    /// paragraph of the subtitle placeholder.
    Title { title: String, subtitle: String },
    /// Uses the title-and-content layout.
    Content { title: String, items: Vec<Item> },
}

impl Slide {
    pub fn title(&self) -> &str {
        match self {
            Slide::Title { title, .. } | Slide::Content { title, .. } => title,
        }
    }

    /// Paragraphs the body placeholder will hold, with their levels.
    pub fn body_paragraphs(&self) -> Vec<(u8, &str)> {
        match self {
            Slide::Title { subtitle, .. } => subtitle.split('\n').map(|line| (0, line)).collect(),
            Slide::Content { items, .. } => items.iter().flat_map(Item::paragraphs).collect(),
        }
    }
}

/// An ordered list of slides plus the presentation title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Fold-style builder for a [`Deck`].
#[derive(Debug, Clone)]
#[must_use = "a deck builder does nothing until `build` is called"]
pub struct DeckBuilder {
    deck: Deck,
}

impl DeckBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            deck: Deck {
                title: title.into(),
                slides: Vec::new(),
            },
        }
    }

    pub fn title_slide(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.deck.slides.push(Slide::Title {
            title: title.into(),
            subtitle: subtitle.into(),
        });
        self
    }

    pub fn content_slide<I: Into<Item>>(
        mut self,
        title: impl Into<String>,
        items: impl IntoIterator<Item = I>,
    ) -> Self {
        self.deck.slides.push(Slide::Content {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> Deck {
        self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_item_levels() {
        let item = Item::nested("Multi-Tenancy", ["Scheiding per tenant", "Eigen database"]);
        assert_eq!(
            item.paragraphs(),
            vec![
                (0, "Multi-Tenancy"),
                (1, "Scheiding per tenant"),
                (1, "Eigen database")
            ]
        );
    }

    #[test]
    fn test_deck_order() {
        let deck = DeckBuilder::new("Deck")
            .title_slide("Welkom", "Regel een\n\nRegel drie")
            .content_slide("Agenda", ["Intro", "Demo"])
            .content_slide("Slot", [Item::plain(""), Item::nested("Vragen", ["?"])])
            .build();

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides()[0].title(), "Welkom");
        assert_eq!(
            deck.slides()[0].body_paragraphs(),
            vec![(0, "Regel een"), (0, ""), (0, "Regel drie")]
        );
        assert_eq!(deck.slides()[2].body_paragraphs().len(), 3);
    }

    #[test]
    fn test_empty_deck() {
        let deck = DeckBuilder::new("Leeg").build();
        assert!(deck.is_empty());
        assert_eq!(deck.title(), "Leeg");
    }
}
