/// Milliseconds from a monotonic-enough clock: `Date.now()` in the browser,
/// `Instant` elapsed since first use on native targets.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Stopwatch for the perf snapshot.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer(f64);

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer(now_ms())
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.0).max(0.0)
    }
}

/// Run `f`, timing it only when perf metrics are on.
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    let timer = enabled.then(PerfTimer::start);
    let out = f();
    (out, timer.map_or(0.0, |t| t.elapsed_ms()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_skips_the_clock_when_disabled() {
        let (out, ms) = timed(false, || 7);
        assert_eq!(out, 7);
        assert_eq!(ms, 0.0);
    }

    #[test]
    fn timed_reports_non_negative_durations() {
        let (out, ms) = timed(true, || (0..1000u32).sum::<u32>());
        assert_eq!(out, 499_500);
        assert!(ms >= 0.0 && ms.is_finite());
    }
}
