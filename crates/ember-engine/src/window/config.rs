use crate::error::WindowError;

/// Lowest accepted `update_frequency`, in Hz.
pub const MIN_UPDATE_FREQUENCY: f64 = 1.0;

/// Requested graphics context version.
///
/// Ordered, so `ContextVersion::new(4, 3) <= v` reads as "at least 4.3".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ContextVersion {
    pub major: u32,
    pub minor: u32,
}

impl ContextVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

/// Window/context configuration.
///
/// Supplied once when the window is created and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
    pub context_version: ContextVersion,
    /// Multisample count; 0 and 1 both disable MSAA.
    pub msaa_samples: u32,
    /// Ask for the most capable context the driver offers instead of
    /// `context_version`.
    pub use_latest_context: bool,
    /// Iteration rate cap in Hz when vsync is off.
    pub update_frequency: f64,
    /// Length of one performance sampling window, seconds.
    pub perf_sample_interval: f64,
    /// Number of `FrameMetrics` records retained.
    pub perf_log_capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ember".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            context_version: ContextVersion::new(3, 3),
            msaa_samples: 0,
            use_latest_context: false,
            update_frequency: 120.0,
            perf_sample_interval: 1.0,
            perf_log_capacity: 300,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Requested window size in window coordinates.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn context_version(mut self, major: u32, minor: u32) -> Self {
        self.context_version = ContextVersion::new(major, minor);
        self
    }

    pub fn msaa_samples(mut self, samples: u32) -> Self {
        self.msaa_samples = samples;
        self
    }

    pub fn use_latest_context(mut self, latest: bool) -> Self {
        self.use_latest_context = latest;
        self
    }

    pub fn update_frequency(mut self, hz: f64) -> Self {
        self.update_frequency = hz;
        self
    }

    pub fn perf_sample_interval(mut self, seconds: f64) -> Self {
        self.perf_sample_interval = seconds;
        self
    }

    pub fn perf_log_capacity(mut self, records: usize) -> Self {
        self.perf_log_capacity = records;
        self
    }

    /// Effective MSAA sample count (at least 1).
    pub fn sample_count(&self) -> u32 {
        self.msaa_samples.max(1)
    }

    /// Rejects configurations no backend could honour.
    pub fn validate(&self) -> Result<(), WindowError> {
        let invalid = |msg: String| Err(WindowError::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.update_frequency.is_finite() && self.update_frequency >= MIN_UPDATE_FREQUENCY) {
            return invalid(format!(
                "update frequency must be at least {MIN_UPDATE_FREQUENCY} Hz, got {}",
                self.update_frequency
            ));
        }
        if !(self.perf_sample_interval.is_finite() && self.perf_sample_interval > 0.0) {
            return invalid(format!(
                "perf sample interval must be positive, got {}",
                self.perf_sample_interval
            ));
        }
        if self.perf_log_capacity == 0 {
            return invalid("perf log capacity must be at least 1".to_string());
        }
        if self.msaa_samples > 1 && !self.msaa_samples.is_power_of_two() {
            return invalid(format!(
                "msaa sample count must be a power of two, got {}",
                self.msaa_samples
            ));
        }
        Ok(())
    }
}
