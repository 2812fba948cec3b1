/// Transient hover/select state for the mounted map.
///
/// Invariant: `panel_open` implies `selected` is set. Every transition that
/// clears the selection clears the panel flag in the same step, so an open
/// panel can never point at nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<String>,
    selected: Option<String>,
    panel_open: bool,
}

impl InteractionState {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.selected.is_none() && !self.panel_open
    }
}

/// Fill emphasis for one region in one frame. At most one of
/// `Selected`/`Hovered` applies per region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Hovered,
    Default,
}

/// `selected (only while the panel is open) > hovered > default`.
///
/// Pure function of the state and the region key; recomputed per
/// interaction change, never by re-aggregating geometry.
pub fn highlight_for(state: &InteractionState, region_key: &str) -> Highlight {
    if state.panel_open && state.selected.as_deref() == Some(region_key) {
        Highlight::Selected
    } else if state.hovered.as_deref() == Some(region_key) {
        Highlight::Hovered
    } else {
        Highlight::Default
    }
}

/// Cursor affordance on the renderer surface. A side effect of pointer
/// movement, not part of the logical state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

/// Pointer-event state machine over the rendered regions.
///
/// The renderer resolves pointer coordinates to a region key (or none)
/// before calling in; the controller never sees geometry. A key with no
/// matching card data is still accepted — selection does not gate on
/// data-fetch completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Drops all interaction, selection included. Called whenever the
    /// rendered region set changes: a region that disappeared cannot stay
    /// selected.
    pub fn reset(&mut self) {
        self.state = InteractionState::default();
    }

    /// Pointer moved; `hit` is the region under the pointer, if any.
    ///
    /// Returns the cursor affordance to show. Hover never disturbs an
    /// active selection, and moving onto empty space clears hover only.
    pub fn on_pointer_move(&mut self, hit: Option<&str>) -> Cursor {
        match hit {
            Some(key) => {
                if !self.state.panel_open {
                    self.state.hovered = Some(key.to_string());
                }
                Cursor::Pointer
            }
            None => {
                self.state.hovered = None;
                Cursor::Default
            }
        }
    }

    /// Click; `hit` is the region under the pointer, if any.
    ///
    /// A region click selects it and opens the panel regardless of prior
    /// state, and returns the clicked key so the caller can notify the host
    /// exactly once, after the transition. A background click clears an
    /// active selection (closing the panel) and is otherwise a no-op.
    pub fn on_click(&mut self, hit: Option<&str>) -> Option<String> {
        match hit {
            Some(key) => {
                self.state.hovered = None;
                self.state.selected = Some(key.to_string());
                self.state.panel_open = true;
                Some(key.to_string())
            }
            None => {
                if self.state.selected.is_some() {
                    self.reset();
                }
                None
            }
        }
    }

    /// Panel's own close control.
    pub fn close(&mut self) {
        if self.state.selected.is_some() {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Cursor, Highlight, InteractionController, highlight_for};

    #[test]
    fn hover_tracks_pointer_and_cursor() {
        let mut c = InteractionController::new();
        assert_eq!(c.on_pointer_move(Some("central")), Cursor::Pointer);
        assert_eq!(c.state().hovered(), Some("central"));

        assert_eq!(c.on_pointer_move(None), Cursor::Default);
        assert!(c.state().is_idle());
    }

    #[test]
    fn click_selects_and_opens_panel() {
        let mut c = InteractionController::new();
        let clicked = c.on_click(Some("central"));
        assert_eq!(clicked.as_deref(), Some("central"));
        assert_eq!(c.state().selected(), Some("central"));
        assert!(c.state().panel_open());
    }

    #[test]
    fn reclick_on_same_region_is_idempotent() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        let before = c.state().clone();
        c.on_click(Some("central"));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn click_elsewhere_moves_selection() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        c.on_click(Some("west"));
        assert_eq!(c.state().selected(), Some("west"));
        assert!(c.state().panel_open());
    }

    #[test]
    fn background_click_clears_selection_and_panel_together() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        assert_eq!(c.on_click(None), None);
        assert!(c.state().is_idle());

        // Not selected: background click is a no-op.
        c.on_pointer_move(Some("west"));
        c.on_click(None);
        assert_eq!(c.state().hovered(), Some("west"));
    }

    #[test]
    fn hover_does_not_disturb_selection() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        assert_eq!(c.on_pointer_move(Some("west")), Cursor::Pointer);
        assert_eq!(c.state().selected(), Some("central"));
        assert_eq!(c.state().hovered(), None);

        // Moving off regions clears hover only, never the selection.
        c.on_pointer_move(None);
        assert_eq!(c.state().selected(), Some("central"));
        assert!(c.state().panel_open());
    }

    #[test]
    fn close_returns_to_idle() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        c.close();
        assert!(c.state().is_idle());
        c.close();
        assert!(c.state().is_idle());
    }

    #[test]
    fn panel_invariant_holds_across_transition_scripts() {
        // An open panel implies a selection, for every reachable state.
        let scripts: Vec<Vec<(&str, Option<&str>)>> = vec![
            vec![("move", Some("a")), ("click", Some("a")), ("move", None)],
            vec![("click", Some("a")), ("click", None), ("move", Some("b"))],
            vec![("click", Some("a")), ("close", None), ("click", Some("b"))],
            vec![("move", Some("a")), ("move", Some("b")), ("click", None)],
        ];
        for script in scripts {
            let mut c = InteractionController::new();
            for (op, hit) in script {
                match op {
                    "move" => {
                        c.on_pointer_move(hit);
                    }
                    "click" => {
                        c.on_click(hit);
                    }
                    _ => c.close(),
                }
                assert!(!c.state().panel_open() || c.state().selected().is_some());
            }
        }
    }

    #[test]
    fn highlight_priority_selected_over_hovered() {
        let mut c = InteractionController::new();
        c.on_click(Some("central"));
        let state = c.state();
        assert_eq!(highlight_for(state, "central"), Highlight::Selected);
        assert_eq!(highlight_for(state, "west"), Highlight::Default);

        let mut c = InteractionController::new();
        c.on_pointer_move(Some("west"));
        assert_eq!(highlight_for(c.state(), "west"), Highlight::Hovered);
        assert_eq!(highlight_for(c.state(), "central"), Highlight::Default);
    }

    #[test]
    fn unknown_keys_are_still_selectable() {
        // The controller does not share a validity table with the panel
        // binder; a key missing from card data still selects.
        let mut c = InteractionController::new();
        c.on_click(Some("not-in-any-dictionary"));
        assert_eq!(c.state().selected(), Some("not-in-any-dictionary"));
        assert!(c.state().panel_open());
    }
}
