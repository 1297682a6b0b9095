use alloc::format;
use alloc::string::String;

use crate::*;

pub const FLAG_GLYPH: &str = "🚩";
pub const HIDDEN_GLYPH: &str = "■";

/// What the tile looks like for a given set of args.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileFace {
    flagged: bool,
    title: Option<String>,
}

impl TileFace {
    pub fn from_args(args: &RenderArgs) -> Self {
        Self {
            flagged: args.flagged,
            title: args
                .position()
                .map(|(row, column)| format!("({}, {})", row, column)),
        }
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn glyph(&self) -> &'static str {
        if self.flagged {
            FLAG_GLYPH
        } else {
            HIDDEN_GLYPH
        }
    }

    pub const fn classes(&self) -> &'static [&'static str] {
        if self.flagged {
            &["tile", "flag"]
        } else {
            &["tile"]
        }
    }

    /// Position hint for debugging, only when the host sent both coordinates.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_tile_shows_marker() {
        let face = TileFace::from_args(&RenderArgs::new(2, 3, true));
        assert_eq!(face.glyph(), FLAG_GLYPH);
        assert_eq!(face.classes(), &["tile", "flag"]);
    }

    #[test]
    fn unflagged_tile_is_unmarked() {
        let face = TileFace::from_args(&RenderArgs::new(2, 3, false));
        assert_eq!(face.glyph(), HIDDEN_GLYPH);
        assert_eq!(face.classes(), &["tile"]);
    }

    #[test]
    fn title_needs_both_coordinates() {
        let face = TileFace::from_args(&RenderArgs::new(2, 3, false));
        assert_eq!(face.title(), Some("(2, 3)"));

        let args = RenderArgs {
            row: Some(2),
            ..Default::default()
        };
        assert_eq!(TileFace::from_args(&args).title(), None);
    }
}
