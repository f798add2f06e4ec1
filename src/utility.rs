use std::time::Instant;

/// Reports how long it lived as a `trace` event when dropped.
pub struct StopWatch {
    instant: Instant,
    name: &'static str
}

impl StopWatch {
    pub fn named(name: &'static str) -> Self {
        Self { name, instant: Instant::now() }
    }

    /// Starts a watch only when timing traces would actually be recorded,
    /// so an unobserved hot loop never reads the clock.
    pub fn traced(name: &'static str) -> Option<Self> {
        tracing::enabled!(target: "rasteroids::timing", tracing::Level::TRACE)
            .then(|| Self::named(name))
    }
}

impl Drop for StopWatch {
    fn drop(&mut self) {
        tracing::trace!(
            target: "rasteroids::timing",
            "{}: {} ms", self.name, self.instant.elapsed().as_secs_f32() * 1000.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_watch_without_a_subscriber() {
        assert!(StopWatch::traced("step").is_none());
    }
}
