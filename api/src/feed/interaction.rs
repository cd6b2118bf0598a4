//! Interaction state for the feed page
//!
//! Viewport mode, per-card hover playback and the detail-view selection are
//! plain state machines. They decide what happens; the page only applies the
//! resulting `MediaCommand`s to the media elements.

use std::time::{Duration, Instant};

use crate::domain::entities::Post;

/// Viewports narrower than this have no hover concept
pub const TOUCH_BREAKPOINT_PX: u32 = 768;

/// How long the pointer must rest on a card before its video starts
pub const HOVER_PLAY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Narrow or touch viewport: autoplay, overlay always shown
    Touch,
    /// Wide, pointer-capable viewport: hover drives playback and overlay
    Pointer,
}

impl InteractionMode {
    pub fn for_width(width: u32) -> Self {
        if width < TOUCH_BREAKPOINT_PX {
            InteractionMode::Touch
        } else {
            InteractionMode::Pointer
        }
    }

    /// Mode from a viewport-width client hint; no usable hint means a wide viewport
    pub fn from_viewport_hint(hint: Option<&str>) -> Self {
        hint.and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(|w| Self::for_width(w as u32))
            .unwrap_or(InteractionMode::Pointer)
    }

    pub fn overlay_always_visible(&self) -> bool {
        *self == InteractionMode::Touch
    }
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionMode::Touch => write!(f, "touch"),
            InteractionMode::Pointer => write!(f, "pointer"),
        }
    }
}

/// What the page should do to a card's lead video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    /// Pause, rewind to the start and reload
    Reset,
}

impl MediaCommand {
    /// Name understood by the page script
    pub fn name(&self) -> &'static str {
        match self {
            MediaCommand::Play => "play",
            MediaCommand::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Pending { entered_at: Instant },
    Playing,
}

/// Hover-driven playback for one card
#[derive(Debug, Clone)]
pub struct CardPlayback {
    mode: InteractionMode,
    state: PlaybackState,
}

impl CardPlayback {
    pub fn new(mode: InteractionMode) -> Self {
        let state = match mode {
            InteractionMode::Touch => PlaybackState::Playing,
            InteractionMode::Pointer => PlaybackState::Idle,
        };
        Self { mode, state }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Pointer entered the card
    pub fn enter(&mut self, now: Instant) {
        if self.mode == InteractionMode::Pointer && self.state == PlaybackState::Idle {
            self.state = PlaybackState::Pending { entered_at: now };
        }
    }

    /// Advance the hover timer
    pub fn tick(&mut self, now: Instant) -> Option<MediaCommand> {
        match self.state {
            PlaybackState::Pending { entered_at }
                if now.saturating_duration_since(entered_at) >= HOVER_PLAY_DELAY =>
            {
                self.state = PlaybackState::Playing;
                Some(MediaCommand::Play)
            }
            _ => None,
        }
    }

    /// Pointer left the card
    pub fn leave(&mut self) -> Option<MediaCommand> {
        if self.mode == InteractionMode::Touch {
            return None;
        }
        match self.state {
            PlaybackState::Idle => None,
            PlaybackState::Pending { .. } | PlaybackState::Playing => {
                self.state = PlaybackState::Idle;
                Some(MediaCommand::Reset)
            }
        }
    }

    /// The viewport crossed the breakpoint
    pub fn set_mode(&mut self, mode: InteractionMode) -> Option<MediaCommand> {
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        match mode {
            InteractionMode::Touch => {
                self.state = PlaybackState::Playing;
                Some(MediaCommand::Play)
            }
            InteractionMode::Pointer => {
                let was_idle = self.state == PlaybackState::Idle;
                self.state = PlaybackState::Idle;
                (!was_idle).then_some(MediaCommand::Reset)
            }
        }
    }
}

/// Command for a card rendered in `from` mode once the viewport turns out to be `to`
pub fn mode_switch_command(from: InteractionMode, to: InteractionMode) -> Option<MediaCommand> {
    CardPlayback::new(from).set_mode(to)
}

/// Which post, if any, the detail view shows
#[derive(Debug, Clone, Default)]
pub enum Selection {
    #[default]
    None,
    Open(Box<Post>),
}

impl Selection {
    /// Open the detail view, replacing whatever it showed
    pub fn select(&mut self, post: Post) {
        *self = Selection::Open(Box::new(post));
    }

    /// Close the detail view and drop its content
    pub fn close(&mut self) {
        *self = Selection::None;
    }

    pub fn current(&self) -> Option<&Post> {
        match self {
            Selection::None => None,
            Selection::Open(post) => Some(post.as_ref()),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}
