use crate::*;

/// Raw input on the rendered tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Plain click.
    Primary,
    /// Secondary click, i.e. the platform's context menu trigger.
    Context,
}

impl Gesture {
    /// Whether the platform's default behavior has to be suppressed.
    pub const fn suppresses_default(self) -> bool {
        matches!(self, Self::Context)
    }
}

/// Maps a gesture to the single action it stands for, given the args the
/// tile was rendered with. Reveal is sent even for flagged tiles, the host
/// decides whether that does anything.
pub const fn translate(gesture: Gesture, args: &RenderArgs) -> TileAction {
    match gesture {
        Gesture::Primary => TileAction::Reveal,
        Gesture::Context if args.flagged => TileAction::Unflag,
        Gesture::Context => TileAction::Flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_toggles_on_flagged() {
        assert_eq!(
            translate(Gesture::Context, &RenderArgs::new(2, 3, false)),
            TileAction::Flag
        );
        assert_eq!(
            translate(Gesture::Context, &RenderArgs::new(2, 3, true)),
            TileAction::Unflag
        );
    }

    #[test]
    fn primary_always_reveals() {
        for flagged in [false, true] {
            assert_eq!(
                translate(Gesture::Primary, &RenderArgs::new(0, 0, flagged)),
                TileAction::Reveal
            );
        }
    }

    #[test]
    fn only_context_suppresses_default() {
        assert!(Gesture::Context.suppresses_default());
        assert!(!Gesture::Primary.suppresses_default());
    }
}
