/// Play/pause button state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    playing: bool,
    scroll_armed: bool,
}

/// What the button handler should do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub label: &'static str,
    pub play: bool,
    pub schedule_scroll: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            scroll_armed: true,
        }
    }
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn label(&self) -> &'static str {
        if self.playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.playing = !self.playing;
        let schedule_scroll = std::mem::replace(&mut self.scroll_armed, false);
        ToggleOutcome {
            label: self.label(),
            play: self.playing,
            schedule_scroll,
        }
    }
}
