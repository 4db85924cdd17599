//! Event system - domain events, bus, compact serialization, session log

pub mod bus;
pub mod format;
pub mod logger;
pub mod types;

pub use bus::{BusEvent, EventBus, update_event_bus_time};
pub use format::serialize_event;
pub use logger::{EventLogger, flush_event_log};
pub use types::{GameConfig, GameEvent, Role};
