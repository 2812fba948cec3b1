pub mod controller;
pub mod panel;

pub use controller::{Cursor, Highlight, InteractionController, InteractionState, highlight_for};
pub use panel::{PanelContent, resolve_panel};
