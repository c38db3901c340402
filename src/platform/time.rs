//! Frame timing

/// Frames averaged for the FPS estimate
pub const FPS_WINDOW: usize = 60;

/// Frames between FPS log lines
pub const FPS_REPORT_INTERVAL: u64 = 300;

/// Ring buffer of recent frame timestamps (ms)
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: Option<u32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: None,
        }
    }

    /// Record a frame timestamp and return the FPS estimate, once the window is full
    pub fn record(&mut self, time: f64) -> Option<u32> {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot about to be overwritten holds the oldest sample
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                let frames = (FPS_WINDOW - 1) as f64;
                self.fps = Some((frames * 1000.0 / elapsed).round() as u32);
            }
        }
        self.fps
    }

    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    /// Whether `frame_count` is due for an FPS log line
    pub fn should_report(&self, frame_count: u64) -> bool {
        self.fps.is_some() && frame_count > 0 && frame_count % FPS_REPORT_INTERVAL == 0
    }
}
