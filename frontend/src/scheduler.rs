use gloo_timers::callback::{Interval, Timeout};
use slot_shared::Scheduler;
use yew::Callback;

/// Browser timers for the spin animation. Dropping a handle clears its timer,
/// so dropping the scheduler leaves nothing pending.
pub struct GlooScheduler {
    on_tick: Callback<()>,
    on_settled: Callback<()>,
    flicker: Option<Interval>,
    settle: Option<Timeout>,
}

impl GlooScheduler {
    pub fn new(on_tick: Callback<()>, on_settled: Callback<()>) -> Self {
        Self {
            on_tick,
            on_settled,
            flicker: None,
            settle: None,
        }
    }
}

impl Scheduler for GlooScheduler {
    fn start_flicker(&mut self, interval_ms: u32) {
        let on_tick = self.on_tick.clone();
        self.flicker = Some(Interval::new(interval_ms, move || on_tick.emit(())));
    }

    fn stop_flicker(&mut self) {
        if let Some(interval) = self.flicker.take() {
            drop(interval);
        }
    }

    fn start_settle_delay(&mut self, delay_ms: u32) {
        let on_settled = self.on_settled.clone();
        self.settle = Some(Timeout::new(delay_ms, move || on_settled.emit(())));
    }

    fn cancel_all(&mut self) {
        self.flicker = None;
        self.settle = None;
    }
}
