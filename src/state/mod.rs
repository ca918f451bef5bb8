//! Application state management modules.

mod picker;
mod selection;

pub use picker::PickerState;
pub use selection::{Focus, PickedColor, Selection};
