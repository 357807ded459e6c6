//! Presentation applied to [`ChoiceItem`]s at the render boundary.
//!
//! The grouped control renders each option as a styled card with a decorated label. The
//! dropdown keeps the original label and shows the icon through a shared row renderer.
//! Both projections come from the same items so the two controls never drift apart.

use serde::{Deserialize, Serialize};

use crate::options::ChoiceItem;

/// Inline style of icons inside dropdown rows and the dropdown title.
pub const DROPDOWN_ICON_STYLE: &str = "margin-right: 8px; color: #605e5c;";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Card colors and spacing for the grouped control.
pub struct ChoicePalette {
    /// Card background.
    pub background: String,
    /// Card background while hovered.
    pub hover_background: String,
    /// Card background while checked.
    pub checked_background: String,
    /// Card text color.
    pub text: String,
    /// Card padding.
    pub padding: String,
    /// Gap between cards.
    pub margin: String,
    /// Card corner radius.
    pub border_radius: String,
    /// Group label color.
    pub label_color: String,
    /// Flex direction of the card row.
    pub flex_direction: String,
}

impl Default for ChoicePalette {
    fn default() -> Self {
        Self {
            background: "pink".to_string(),
            hover_background: "lightpink".to_string(),
            checked_background: "hotpink".to_string(),
            text: "black".to_string(),
            padding: "10px".to_string(),
            margin: "5px".to_string(),
            border_radius: "5px".to_string(),
            label_color: "#000".to_string(),
            flex_direction: "row".to_string(),
        }
    }
}

impl ChoicePalette {
    /// Inline style for the container holding the cards.
    pub fn options_style(&self) -> String {
        format!("display: flex; flex-direction: {};", self.flex_direction)
    }

    /// Inline style for the group label.
    pub fn label_style(&self) -> String {
        format!("color: {};", self.label_color)
    }

    /// Inline style for one option card.
    ///
    /// Hover and checked colors are exposed as custom properties because inline styles
    /// cannot target pseudo-classes; the host stylesheet reads them.
    pub fn card_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; padding: {}; margin: {}; border-radius: {}; \
             --choice-hover-background: {}; --choice-checked-background: {};",
            self.background,
            self.text,
            self.padding,
            self.margin,
            self.border_radius,
            self.hover_background,
            self.checked_background,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Host-adjustable decoration of the grouped control.
///
/// The default reproduces the shipped look: a `" Barbie"` label suffix and a pink card
/// palette. [`ChoiceDecoration::plain`] turns both off.
pub struct ChoiceDecoration {
    /// Text appended to grouped-control labels.
    pub label_suffix: Option<String>,
    /// Card palette; `None` leaves cards unstyled.
    pub palette: Option<ChoicePalette>,
}

impl Default for ChoiceDecoration {
    fn default() -> Self {
        Self {
            label_suffix: Some(" Barbie".to_string()),
            palette: Some(ChoicePalette::default()),
        }
    }
}

impl ChoiceDecoration {
    /// Decoration without label suffix or card styling.
    pub fn plain() -> Self {
        Self {
            label_suffix: None,
            palette: None,
        }
    }

    /// Label shown on a grouped-control card.
    pub fn grouped_label(&self, item: &ChoiceItem) -> String {
        match self.label_suffix.as_deref() {
            Some(suffix) => format!("{}{suffix}", item.label),
            None => item.label.clone(),
        }
    }

    /// Inline card style, if a palette is configured.
    pub fn card_style(&self) -> Option<String> {
        self.palette.as_ref().map(ChoicePalette::card_style)
    }

    /// Inline style of the card container, if a palette is configured.
    pub fn options_style(&self) -> Option<String> {
        self.palette.as_ref().map(ChoicePalette::options_style)
    }

    /// Inline style of the group label, if a palette is configured.
    pub fn label_style(&self) -> Option<String> {
        self.palette.as_ref().map(ChoicePalette::label_style)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One option as a specific control presents it.
pub struct DecoratedChoice {
    /// Stable key.
    pub key: String,
    /// Value reported on selection.
    pub value: i32,
    /// Text shown for the option.
    pub text: String,
    /// Icon name, if configured.
    pub icon: Option<String>,
    /// Inline style, if any.
    pub style: Option<String>,
}

/// Projects items onto grouped-control cards.
pub fn grouped_choices(items: &[ChoiceItem], decoration: &ChoiceDecoration) -> Vec<DecoratedChoice> {
    let style = decoration.card_style();
    items
        .iter()
        .map(|item| DecoratedChoice {
            key: item.key.clone(),
            value: item.value,
            text: decoration.grouped_label(item),
            icon: item.icon.clone(),
            style: style.clone(),
        })
        .collect()
}

/// Projects items onto dropdown rows, keeping the original labels.
pub fn dropdown_choices(items: &[ChoiceItem]) -> Vec<DecoratedChoice> {
    items
        .iter()
        .map(|item| DecoratedChoice {
            key: item.key.clone(),
            value: item.value,
            text: item.label.clone(),
            icon: item.icon.clone(),
            style: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(value: i32, label: &str, icon: Option<&str>) -> ChoiceItem {
        ChoiceItem {
            key: value.to_string(),
            value,
            label: label.to_string(),
            icon: icon.map(str::to_string),
        }
    }

    #[test]
    fn default_decoration_appends_suffix_and_styles_cards() {
        let decoration = ChoiceDecoration::default();
        let cards = grouped_choices(&[item(1, "Email", Some("Mail"))], &decoration);

        assert_eq!(cards[0].text, "Email Barbie");
        assert_eq!(cards[0].icon.as_deref(), Some("Mail"));
        let style = cards[0].style.as_deref().expect("card style");
        assert!(style.starts_with("background-color: pink; color: black; padding: 10px;"));
        assert!(style.contains("--choice-hover-background: lightpink;"));
        assert!(style.contains("--choice-checked-background: hotpink;"));
    }

    #[test]
    fn plain_decoration_leaves_cards_untouched() {
        let cards = grouped_choices(&[item(1, "Email", None)], &ChoiceDecoration::plain());

        assert_eq!(cards[0].text, "Email");
        assert_eq!(cards[0].style, None);
    }

    #[test]
    fn group_layout_and_label_color_follow_the_palette() {
        let decoration = ChoiceDecoration::default();
        assert_eq!(
            decoration.options_style().as_deref(),
            Some("display: flex; flex-direction: row;")
        );
        assert_eq!(decoration.label_style().as_deref(), Some("color: #000;"));

        let plain = ChoiceDecoration::plain();
        assert_eq!(plain.options_style(), None);
        assert_eq!(plain.label_style(), None);
    }

    #[test]
    fn dropdown_rows_keep_original_labels() {
        let rows = dropdown_choices(&[item(2, "Call", Some("Phone"))]);

        assert_eq!(
            rows,
            vec![DecoratedChoice {
                key: "2".to_string(),
                value: 2,
                text: "Call".to_string(),
                icon: Some("Phone".to_string()),
                style: None,
            }]
        );
    }

    #[test]
    fn decoration_deserializes_with_partial_fields() {
        let decoration: ChoiceDecoration =
            serde_json::from_str(r#"{"label_suffix":null,"palette":{"background":"teal"}}"#)
                .expect("decoration");

        assert_eq!(decoration.label_suffix, None);
        let palette = decoration.palette.expect("palette");
        assert_eq!(palette.background, "teal");
        assert_eq!(palette.checked_background, "hotpink");
    }
}
