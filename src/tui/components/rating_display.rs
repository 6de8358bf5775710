//! Aggregate display component.

use super::{EMPTY_STAR, FILLED_STAR, HALF_STAR};
use crate::page::RatingDisplay;
use crate::rating::DisplayIcon;

/// Component for aggregate rating displays.
#[derive(Debug, Clone, Default)]
pub struct RatingDisplayComponent {
    label_width: usize,
}

impl RatingDisplayComponent {
    /// Creates a component whose item labels are padded to `label_width`.
    #[must_use]
    pub const fn new(label_width: usize) -> Self {
        Self { label_width }
    }

    /// Renders one display, e.g. `  Item 7    ★★★★⯪ 4.5 (2 ratings)`.
    #[must_use]
    pub fn view(&self, display: &RatingDisplay) -> String {
        let icons = icon_row(display);
        let label = format!("Item {}", display.item_id());
        let average = display.average_text();
        let count = display.count_text();
        if average.is_empty() {
            format!("  {label:<width$}  {icons} {count}\n", width = self.label_width)
        } else {
            format!(
                "  {label:<width$}  {icons} {average} {count}\n",
                width = self.label_width
            )
        }
    }
}

/// Renders the five aggregate icons of a display.
#[must_use]
pub fn icon_row(display: &RatingDisplay) -> String {
    display.icons().iter().map(|icon| glyph(*icon)).collect()
}

const fn glyph(icon: DisplayIcon) -> char {
    match icon {
        DisplayIcon::Full => FILLED_STAR,
        DisplayIcon::Half => HALF_STAR,
        DisplayIcon::Empty => EMPTY_STAR,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RatingDisplayComponent;
    use crate::page::{ItemId, RatingDisplay};
    use crate::rating::Average;

    #[rstest]
    #[case::half(4.5, 2, "  Item 7    ★★★★⯪ 4.5 (2 ratings)\n")]
    #[case::whole(4.0, 1, "  Item 7    ★★★★☆ 4 (1 rating)\n")]
    #[case::none(0.0, 0, "  Item 7    ☆☆☆☆☆ 0 (0 ratings)\n")]
    fn renders_icons_average_and_count(
        #[case] average: f64,
        #[case] count: u64,
        #[case] expected: &str,
    ) {
        let display = RatingDisplay::new(ItemId::new("7"), &Average::from_value(average), count);

        assert_eq!(RatingDisplayComponent::new(8).view(&display), expected);
    }
}
