use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::RngCore;

use crate::persistence::Snapshot;
use crate::shared_slot_game::{History, HistoryEntry, Reels, SlotConfig};

/// Source of settlement timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    /// Cosmetic frames drawn up front; `shown` of them have been published.
    Flickering { frames: Vec<Reels>, shown: usize },
    /// Outcome applied, waiting for the settle delay before accepting spins again.
    Settling,
}

impl SpinPhase {
    pub fn is_spinning(&self) -> bool {
        !matches!(self, SpinPhase::Idle)
    }

    fn name(&self) -> &'static str {
        match self {
            SpinPhase::Idle => "idle",
            SpinPhase::Flickering { .. } => "flickering",
            SpinPhase::Settling => "settling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    Spin,
    FlickerTick,
    SettleElapsed,
    Reset,
}

/// Work the owner of the machine has to carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartFlicker { interval_ms: u32 },
    StopFlicker,
    StartSettleDelay { delay_ms: u32 },
    CancelTimers,
    /// Balance or history changed.
    Persist,
    ClearStorage,
}

#[derive(Debug, Clone)]
pub struct SlotMachine {
    config: SlotConfig,
    phase: SpinPhase,
    reels: Reels,
    balance: i64,
    history: History,
}

impl SlotMachine {
    pub fn new(config: SlotConfig) -> Self {
        let balance = config.starting_balance;
        Self {
            config,
            phase: SpinPhase::Idle,
            reels: Reels::INITIAL,
            balance,
            history: History::new(),
        }
    }

    /// Resumes from a persisted snapshot. The reels always start at the initial display.
    pub fn restore(config: SlotConfig, snapshot: Snapshot) -> Self {
        let history = History::from_entries(snapshot.history.entries().to_vec(), config.history_limit);
        Self {
            config,
            phase: SpinPhase::Idle,
            reels: Reels::INITIAL,
            balance: snapshot.balance,
            history,
        }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase.is_spinning()
    }

    pub fn reels(&self) -> Reels {
        self.reels
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balance: self.balance,
            history: self.history.clone(),
        }
    }

    /// Applies one event. Events that make no sense in the current phase are ignored
    /// and produce no effects.
    pub fn handle<R: RngCore + ?Sized>(
        &mut self,
        event: SpinEvent,
        rng: &mut R,
        clock: &dyn Clock,
    ) -> Vec<Effect> {
        let phase = std::mem::replace(&mut self.phase, SpinPhase::Idle);

        let (next, effects) = match (phase, event) {
            (_, SpinEvent::Reset) => {
                self.reset_state();
                info!("Machine reset, balance back to {}", self.balance);
                (SpinPhase::Idle, vec![Effect::CancelTimers, Effect::ClearStorage])
            }
            (SpinPhase::Idle, SpinEvent::Spin) => {
                let frames = (0..self.config.flicker_frames)
                    .map(|_| Reels::random(rng))
                    .collect();
                debug!("Spin started");
                (
                    SpinPhase::Flickering { frames, shown: 0 },
                    vec![Effect::StartFlicker {
                        interval_ms: self.config.flicker_interval_ms,
                    }],
                )
            }
            (SpinPhase::Flickering { frames, shown }, SpinEvent::FlickerTick) => {
                if let Some(frame) = frames.get(shown) {
                    self.reels = *frame;
                }
                let shown = shown + 1;
                if shown < frames.len() {
                    (SpinPhase::Flickering { frames, shown }, Vec::new())
                } else {
                    self.settle(rng, clock);
                    (
                        SpinPhase::Settling,
                        vec![
                            Effect::StopFlicker,
                            Effect::Persist,
                            Effect::StartSettleDelay {
                                delay_ms: self.config.settle_delay_ms,
                            },
                        ],
                    )
                }
            }
            (SpinPhase::Settling, SpinEvent::SettleElapsed) => {
                debug!("Spin finished");
                (SpinPhase::Idle, Vec::new())
            }
            (phase, event) => {
                debug!("Ignoring {:?} while {}", event, phase.name());
                (phase, Vec::new())
            }
        };

        self.phase = next;
        effects
    }

    fn settle<R: RngCore + ?Sized>(&mut self, rng: &mut R, clock: &dyn Clock) {
        let outcome = Reels::random(rng);
        self.reels = outcome;

        let (result, delta) = self.config.evaluate(&outcome);
        self.balance = self.balance.saturating_add(delta);

        let entry = HistoryEntry::new(outcome, result, delta, clock.now());
        info!(
            "Spin settled: {} -> {} ({}), balance {}",
            outcome,
            result,
            entry.signed_delta(),
            self.balance
        );
        self.history.record(entry, self.config.history_limit);
    }

    fn reset_state(&mut self) {
        self.balance = self.config.starting_balance;
        self.history = History::new();
        self.reels = Reels::INITIAL;
    }
}
