//! Command implementations

pub mod edit;
pub mod play_simple;
pub mod preview;

pub use edit::{add_entry, remove_entry, set_entry};
pub use play_simple::run_simple;
pub use preview::{preview_phrase, PreviewResult};
