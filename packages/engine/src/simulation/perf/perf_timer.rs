/// Wall-clock stopwatch for `PerfStats`: `Date.now()` in the browser,
/// `Instant` natively.
///
/// wasm32 has no monotonic clock without extra web-sys features, and the
/// numbers only need to be comparable within one frame, so phase timings
/// are plain wall-clock deltas in milliseconds.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Start a timer only when perf metrics are on
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        if enabled {
            Some(Self::start())
        } else {
            None
        }
    }
}
