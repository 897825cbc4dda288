mod core;

pub use self::core::{FleetEntry, SentinelEngine};
