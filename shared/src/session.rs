use log::{debug, info, warn};
use rand::RngCore;

use crate::persistence::{clear_snapshot, load_snapshot, save_snapshot, KeyValueStore, LoadReport};
use crate::shared_slot_game::SlotConfig;
use crate::slot_machine::{Clock, Effect, SlotMachine, SpinEvent};

/// Timer backend. Each started timer reports back through the owner, which
/// forwards `flicker_tick` / `settle_elapsed` to the session.
pub trait Scheduler {
    fn start_flicker(&mut self, interval_ms: u32);
    fn stop_flicker(&mut self);
    fn start_settle_delay(&mut self, delay_ms: u32);
    fn cancel_all(&mut self);
}

/// One mounted slot machine: its state, storage, timers, randomness and clock.
pub struct SlotSession<S, T, R> {
    machine: SlotMachine,
    store: S,
    scheduler: T,
    rng: R,
    clock: Box<dyn Clock>,
    load_report: LoadReport,
    torn_down: bool,
}

impl<S, T, R> SlotSession<S, T, R>
where
    S: KeyValueStore,
    T: Scheduler,
    R: RngCore,
{
    pub fn open(config: SlotConfig, store: S, scheduler: T, rng: R, clock: Box<dyn Clock>) -> Self {
        let load_report = load_snapshot(&store, &config);
        if !load_report.is_clean() {
            debug!("Loaded state with defaults: {:?}", load_report);
        }
        let machine = SlotMachine::restore(config, load_report.snapshot.clone());
        info!("Slot machine ready, balance {}", machine.balance());

        Self {
            machine,
            store,
            scheduler,
            rng,
            clock,
            load_report,
            torn_down: false,
        }
    }

    pub fn machine(&self) -> &SlotMachine {
        &self.machine
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn spin(&mut self) {
        self.dispatch(SpinEvent::Spin);
    }

    pub fn flicker_tick(&mut self) {
        self.dispatch(SpinEvent::FlickerTick);
    }

    pub fn settle_elapsed(&mut self) {
        self.dispatch(SpinEvent::SettleElapsed);
    }

    /// Clears balance, history and storage once `confirm` agrees. Returns whether it did.
    pub fn reset<F: FnOnce() -> bool>(&mut self, confirm: F) -> bool {
        if self.torn_down || !confirm() {
            return false;
        }
        self.dispatch(SpinEvent::Reset);
        true
    }

    /// Cancels outstanding timers. Nothing changes after this.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.torn_down = true;
    }

    fn dispatch(&mut self, event: SpinEvent) {
        if self.torn_down {
            debug!("Dropping {:?} after teardown", event);
            return;
        }
        let effects = self.machine.handle(event, &mut self.rng, self.clock.as_ref());
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartFlicker { interval_ms } => self.scheduler.start_flicker(interval_ms),
            Effect::StopFlicker => self.scheduler.stop_flicker(),
            Effect::StartSettleDelay { delay_ms } => self.scheduler.start_settle_delay(delay_ms),
            Effect::CancelTimers => self.scheduler.cancel_all(),
            Effect::Persist => {
                let key = &self.machine.config().storage_key;
                if let Err(e) = save_snapshot(&mut self.store, key, &self.machine.snapshot()) {
                    warn!("Failed to save state: {}", e);
                }
            }
            Effect::ClearStorage => {
                if let Err(e) = clear_snapshot(&mut self.store, &self.machine.config().storage_key) {
                    warn!("Failed to clear saved state: {}", e);
                }
            }
        }
    }
}
