use crate::global::{window, worker_scope};
use crate::ports::clock::ClockPort;
use web_sys::Performance;

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn get_performance(&self) -> Option<Performance> {
        if let Some(worker) = worker_scope() {
            worker.performance()
        } else {
            window()?.performance()
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        match self.get_performance() {
            Some(perf) => perf.time_origin() + perf.now(),
            None => js_sys::Date::now(),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_performance_api_available() {
        assert!(
            Clock::new().get_performance().is_some(),
            "Performance API should be available in browser/worker"
        );
    }

    #[wasm_bindgen_test]
    fn test_clock_now_is_epoch_millis() {
        let timestamp = Clock::new().now();
        assert!(
            timestamp > 1_577_836_800_000.0,
            "Timestamp should be after 2020: {}",
            timestamp
        );
    }

    #[wasm_bindgen_test]
    fn test_clock_monotonic_time() {
        let clock = Clock::new();
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1, "Time should be monotonic (t1={}, t2={})", t1, t2);
    }
}
