pub mod constants;
pub mod persistence;
pub mod session;
pub mod shared_slot_game;
pub mod slot_machine;

pub use persistence::{
    clear_snapshot, load_snapshot, parse_snapshot, save_snapshot, FieldStatus, KeyValueStore,
    LoadReport, LoadSource, MemoryStore, Snapshot, StorageError,
};
pub use session::{Scheduler, SlotSession};
pub use shared_slot_game::{format_delta, HistoryEntry, History, Reels, SlotConfig, SpinResult, Symbol};
pub use slot_machine::{Clock, Effect, SlotMachine, SpinEvent, SpinPhase, SystemClock};
