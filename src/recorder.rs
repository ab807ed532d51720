//! Recorder clock.
//!
//! Microphone capture and encoding stay in the browser (`MediaRecorder`);
//! this keeps the `mm:ss` counter and knows whether there is a finished
//! take to play back or export.

pub const EXPORT_FILE_NAME: &str = "recording.webm";
pub const EXPORT_MIME: &str = "audio/webm";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecorderClock {
    running: bool,
    seconds: u32,
    has_take: bool,
}

/// Format whole seconds as `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

impl RecorderClock {
    /// Start counting. A second start while running is ignored.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.seconds = 0;
        }
    }

    /// One-second timer tick. Returns the new display while running.
    pub fn tick(&mut self) -> Option<String> {
        if !self.running {
            return None;
        }
        self.seconds += 1;
        Some(self.display())
    }

    /// Stop and reset the display. Returns `false` if nothing was recording.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.seconds = 0;
        self.has_take = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Playback and export only make sense once a take has been stopped.
    pub fn has_take(&self) -> bool {
        self.has_take
    }

    pub fn display(&self) -> String {
        format_clock(self.seconds)
    }
}
