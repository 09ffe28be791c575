use console::Style;

/// Display tier of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Neutral,
    Low,
    Medium,
    High,
    Today,
}

impl Tier {
    pub fn style(self) -> Style {
        match self {
            Tier::Neutral => Style::new().black(),
            Tier::Low => Style::new().black().on_white().bold(),
            Tier::Medium => Style::new().black().on_yellow().bold(),
            Tier::High => Style::new().black().on_green().bold(),
            Tier::Today => Style::new().white().on_magenta().bold(),
        }
    }

    /// Wraps `text` in this tier's colors, or returns it untouched when
    /// `color` is off.
    pub fn paint(self, text: &str, color: bool) -> String {
        if color {
            self.style().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Inclusive commit-count range mapped to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub lower: u32,
    pub upper: u32,
    pub tier: Tier,
}

pub const BANDS: [Band; 4] = [
    Band { lower: 0, upper: 0, tier: Tier::Neutral },
    Band { lower: 1, upper: 4, tier: Tier::Low },
    Band { lower: 5, upper: 9, tier: Tier::Medium },
    Band { lower: 10, upper: u32::MAX, tier: Tier::High },
];

/// Leading spaces per minimum value, widest numbers first.
const CELL_PADDING: [(u32, usize); 3] = [(100, 0), (10, 1), (1, 2)];

const EMPTY_CELL: &str = "  - ";

pub fn tier_for(value: u32) -> Tier {
    tier_in(&BANDS, value)
}

/// First band in `bands` containing `value`; neutral when none does.
pub fn tier_in(bands: &[Band], value: u32) -> Tier {
    bands
        .iter()
        .find(|band| (band.lower..=band.upper).contains(&value))
        .map(|band| band.tier)
        .unwrap_or(Tier::Neutral)
}

/// Cell text: a dash for zero, otherwise the number right-aligned so that
/// every cell is at least four characters wide.
pub fn format_cell(value: u32) -> String {
    if value == 0 {
        return EMPTY_CELL.to_string();
    }
    let lead = CELL_PADDING
        .iter()
        .find(|&&(min, _)| value >= min)
        .map(|&(_, lead)| lead)
        .unwrap_or(0);
    format!("{}{value} ", " ".repeat(lead))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_thresholds() {
        let expected = [
            (0, Tier::Neutral),
            (1, Tier::Low),
            (4, Tier::Low),
            (5, Tier::Medium),
            (9, Tier::Medium),
            (10, Tier::High),
            (100, Tier::High),
            (u32::MAX, Tier::High),
        ];
        for (value, tier) in expected {
            assert_eq!(tier_for(value), tier, "value {value}");
        }
    }

    #[test]
    fn cells_are_padded_by_digit_count() {
        let expected = [
            (0, "  - "),
            (1, "  1 "),
            (4, "  4 "),
            (5, "  5 "),
            (9, "  9 "),
            (10, " 10 "),
            (100, "100 "),
            (1234, "1234 "),
        ];
        for (value, text) in expected {
            assert_eq!(format_cell(value), text, "value {value}");
        }
    }

    #[test]
    fn first_matching_band_wins() {
        let bands = [
            Band { lower: 0, upper: 10, tier: Tier::Low },
            Band { lower: 5, upper: 20, tier: Tier::High },
        ];
        assert_eq!(tier_in(&bands, 7), Tier::Low);
        assert_eq!(tier_in(&bands, 15), Tier::High);
        assert_eq!(tier_in(&bands, 21), Tier::Neutral);
    }

    #[test]
    fn paint_without_color_is_plain() {
        assert_eq!(Tier::High.paint(" 12 ", false), " 12 ");
        let painted = Tier::High.paint(" 12 ", true);
        assert_ne!(painted, " 12 ");
        assert_eq!(console::strip_ansi_codes(&painted), " 12 ");
    }
}
