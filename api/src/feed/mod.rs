//! Feed module
//!
//! Presentation of the post feed: media classification, interaction state
//! and HTML rendering.

pub mod interaction;
pub mod media;
pub mod renderer;

pub use interaction::{
    mode_switch_command, CardPlayback, InteractionMode, MediaCommand, PlaybackState, Selection,
};
pub use media::MediaKind;
pub use renderer::{
    render_card, render_detail_dialog, render_error_page, render_feed_page, render_not_found,
    render_student_page,
};
