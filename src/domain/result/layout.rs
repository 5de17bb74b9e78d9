//! Result card layout.
//!
//! Places the decision's data fields on a fixed 800×800 card. The layout is
//! computed once here and every renderer draws the same frames, so vector and
//! raster output carry identical content.

use serde::Serialize;

use crate::domain::catalog::FlowerOption;
use crate::domain::decision::{truncate_text, Question};
use crate::domain::foundation::Timestamp;

/// Width and height of the card canvas, in logical units.
pub const CANVAS_SIZE: u32 = 800;

/// Questions longer than this many characters are cut and marked with `...`.
pub const QUESTION_CEILING: usize = 80;

pub const CARD_TITLE: &str = "🌸 LotusGuess Decision";
pub const CARD_FOOTER: &str = "Made with LotusGuess 🌸";

/// Glyph drawn when the option carries none.
pub const FALLBACK_GLYPH: &str = "🌸";

/// The data a card is drawn from. Rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardContent {
    pub question: String,
    pub meaning: String,
    pub label: String,
    pub glyph: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl CardContent {
    /// Content for a completed decision.
    pub fn for_selection(question: &Question, option: &FlowerOption, created_at: Timestamp) -> Self {
        Self {
            question: question.as_str().to_string(),
            meaning: option.meaning().to_string(),
            label: option.label().to_string(),
            glyph: option.glyph().to_string(),
            description: option.description().to_string(),
            created_at,
        }
    }
}

/// What a field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    Glyph,
    Meaning,
    Question,
    Description,
    Date,
    Footer,
}

impl FieldKind {
    /// The six fields that carry decision data; the footer is decoration.
    pub fn is_data(&self) -> bool {
        !matches!(self, FieldKind::Footer)
    }
}

/// Axis-aligned box on the canvas, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }

    /// Text baseline for a single line set in this frame.
    pub fn baseline(&self) -> u32 {
        self.y + self.height * 3 / 4
    }

    pub fn overlaps(&self, other: &Frame) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub font_size: u32,
    pub weight: FontWeight,
    pub italic: bool,
    /// CSS colour; `None` inherits (used for emoji).
    pub color: Option<&'static str>,
    /// Wraps inside the frame instead of sitting on one centred line.
    pub wrap: bool,
}

impl TextStyle {
    const fn line(font_size: u32, weight: FontWeight, color: Option<&'static str>) -> Self {
        Self {
            font_size,
            weight,
            italic: false,
            color,
            wrap: false,
        }
    }
}

/// One positioned text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub kind: FieldKind,
    pub text: String,
    pub frame: Frame,
    pub style: TextStyle,
}

/// All fields of one card, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub fields: Vec<CardField>,
}

const ACCENT: &str = "#e91e63";
const BODY: &str = "#333";
const MUTED: &str = "#666";
const FAINT: &str = "#999";

impl CardLayout {
    /// Places `content` on the fixed card.
    pub fn compose(content: &CardContent) -> Self {
        let glyph = if content.glyph.trim().is_empty() {
            FALLBACK_GLYPH.to_string()
        } else {
            content.glyph.clone()
        };
        let description = if content.label.trim().is_empty() {
            content.description.clone()
        } else {
            format!("{} - {}", content.label, content.description)
        };

        let fields = vec![
            CardField {
                kind: FieldKind::Title,
                text: CARD_TITLE.to_string(),
                frame: Frame::new(50, 132, 700, 64),
                style: TextStyle::line(36, FontWeight::Bold, Some(ACCENT)),
            },
            CardField {
                kind: FieldKind::Glyph,
                text: glyph,
                frame: Frame::new(50, 200, 700, 106),
                style: TextStyle::line(96, FontWeight::Normal, None),
            },
            CardField {
                kind: FieldKind::Meaning,
                text: content.meaning.clone(),
                frame: Frame::new(50, 324, 700, 75),
                style: TextStyle::line(48, FontWeight::Bold, Some(ACCENT)),
            },
            CardField {
                kind: FieldKind::Question,
                text: truncate_text(&content.question, QUESTION_CEILING),
                frame: Frame::new(80, 420, 640, 120),
                style: TextStyle {
                    font_size: 24,
                    weight: FontWeight::Normal,
                    italic: false,
                    color: Some(BODY),
                    wrap: true,
                },
            },
            CardField {
                kind: FieldKind::Description,
                text: description,
                frame: Frame::new(50, 568, 700, 40),
                style: TextStyle {
                    italic: true,
                    ..TextStyle::line(20, FontWeight::Normal, Some(MUTED))
                },
            },
            CardField {
                kind: FieldKind::Footer,
                text: CARD_FOOTER.to_string(),
                frame: Frame::new(50, 656, 700, 32),
                style: TextStyle::line(18, FontWeight::Normal, Some(FAINT)),
            },
            CardField {
                kind: FieldKind::Date,
                text: content.created_at.date_stamp(),
                frame: Frame::new(50, 692, 700, 24),
                style: TextStyle::line(14, FontWeight::Normal, Some(FAINT)),
            },
        ];

        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            fields,
        }
    }

    pub fn field(&self, kind: FieldKind) -> Option<&CardField> {
        self.fields.iter().find(|field| field.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCatalog, OptionId};

    fn content(question: &str) -> CardContent {
        let rose = OptionCatalog::standard().get(&OptionId::new("rose")).unwrap();
        CardContent::for_selection(
            &Question::new(question).unwrap(),
            rose,
            Timestamp::from_unix_secs(1705314600).unwrap(),
        )
    }

    #[test]
    fn card_holds_all_six_data_fields() {
        let layout = CardLayout::compose(&content("Should I go out today?"));
        let data_fields = layout.fields.iter().filter(|f| f.kind.is_data()).count();

        assert_eq!(data_fields, 6);
        assert_eq!(layout.field(FieldKind::Title).unwrap().text, CARD_TITLE);
        assert_eq!(layout.field(FieldKind::Glyph).unwrap().text, "🌹");
        assert_eq!(layout.field(FieldKind::Meaning).unwrap().text, "Yes");
        assert_eq!(
            layout.field(FieldKind::Question).unwrap().text,
            "Should I go out today?"
        );
        assert_eq!(
            layout.field(FieldKind::Description).unwrap().text,
            "Rose - Love and passion"
        );
        assert_eq!(layout.field(FieldKind::Date).unwrap().text, "2024-01-15");
    }

    #[test]
    fn long_question_is_truncated_on_the_card() {
        let question = "x".repeat(120);
        let layout = CardLayout::compose(&content(&question));
        let shown = &layout.field(FieldKind::Question).unwrap().text;

        assert_eq!(shown, &format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn no_two_fields_overlap() {
        let layout = CardLayout::compose(&content("Tea or coffee?"));
        for (i, a) in layout.fields.iter().enumerate() {
            for b in &layout.fields[i + 1..] {
                assert!(
                    !a.frame.overlaps(&b.frame),
                    "{:?} overlaps {:?}",
                    a.kind,
                    b.kind
                );
            }
        }
    }

    #[test]
    fn fields_fit_on_the_canvas() {
        let layout = CardLayout::compose(&content("Tea or coffee?"));
        for field in &layout.fields {
            assert!(field.frame.x + field.frame.width <= CANVAS_SIZE);
            assert!(field.frame.y + field.frame.height <= CANVAS_SIZE);
        }
    }

    #[test]
    fn missing_glyph_and_label_fall_back() {
        let mut content = content("Tea or coffee?");
        content.glyph = String::new();
        content.label = String::new();
        let layout = CardLayout::compose(&content);

        assert_eq!(layout.field(FieldKind::Glyph).unwrap().text, FALLBACK_GLYPH);
        assert_eq!(
            layout.field(FieldKind::Description).unwrap().text,
            "Love and passion"
        );
    }

    #[test]
    fn frame_overlap_detection() {
        let a = Frame::new(0, 0, 10, 10);
        assert!(a.overlaps(&Frame::new(5, 5, 10, 10)));
        assert!(!a.overlaps(&Frame::new(0, 10, 10, 10)));
        assert_eq!(a.baseline(), 7);
        assert_eq!(a.center_x(), 5);
    }
}
