// Browser builds have no monotonic `Instant`; fall back to `Date.now()`.
#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn millis_since(started: Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        (now() - started).max(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Wall-clock stopwatch started when a solve begins.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(self.started)
    }
}
