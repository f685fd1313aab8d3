use crate::content::ProjectEntry;

/// Multiplier applied to the scroll offset for the hero parallax shift.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Delay before a freshly mounted card reveals itself.
pub const REVEAL_DELAY_MS: u64 = 100;

/// Per-index offset of each card's entrance animation, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;

pub fn parallax_shift(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

/// Interactive flags of a single tech card. `visible` flips once, shortly
/// after mount; `hovered` follows the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub hovered: bool,
    pub visible: bool,
}

impl CardState {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn reveal(&mut self) {
        self.visible = true;
    }
}

/// Open/closed state of the project detail modal.
///
/// The modal is open exactly when a project is selected; holding the
/// selection in an `Option` makes that invariant structural.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    selected: Option<ProjectEntry>,
}

impl ShowcaseState {
    /// Selects a project, opening the modal. Replaces any previous
    /// selection, so switching without closing first is permitted here
    /// even though the overlay keeps the tiles unreachable while open.
    pub fn open(&mut self, project: ProjectEntry) {
        self.selected = Some(project);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&ProjectEntry> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FEATURED_PROJECTS;

    #[test]
    fn test_card_starts_hidden_and_unhovered() {
        let state = CardState::default();
        assert!(!state.hovered);
        assert!(!state.visible);
    }

    #[test]
    fn test_card_reveal() {
        let mut state = CardState::default();
        state.reveal();
        assert!(state.visible);
        // hover is untouched by the reveal
        assert!(!state.hovered);
    }

    #[test]
    fn test_card_hover_round_trip() {
        let mut state = CardState::default();
        state.pointer_enter();
        assert!(state.hovered);
        // repeated enters are idempotent
        state.pointer_enter();
        assert!(state.hovered);
        state.pointer_leave();
        assert!(!state.hovered);
    }

    #[test]
    fn test_open_selects_project() {
        let mut state = ShowcaseState::default();
        assert!(!state.is_open());
        assert!(state.selected().is_none());

        state.open(FEATURED_PROJECTS[0].clone());
        assert!(state.is_open());
        assert_eq!(state.selected().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_close_resets_selection() {
        let mut state = ShowcaseState::default();
        state.open(FEATURED_PROJECTS[1].clone());
        assert!(state.is_open());

        state.close();
        assert!(!state.is_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_open_replaces_selection() {
        let mut state = ShowcaseState::default();
        state.open(FEATURED_PROJECTS[0].clone());
        state.open(FEATURED_PROJECTS[1].clone());
        assert_eq!(state.selected().map(|p| p.id), Some(2));
        assert!(state.is_open());
    }

    #[test]
    fn test_parallax_shift() {
        assert_eq!(parallax_shift(200.0), 100.0);
        assert_eq!(parallax_shift(0.0), 0.0);
    }

    #[test]
    fn test_stagger_delay_scales_with_index() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(1) - 0.1).abs() < 1e-9);
        assert!((stagger_delay(5) - 0.5).abs() < 1e-9);
    }
}
