//! Plain data row types written by output backends.

/// One tick of an episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub reward:         f64,
    /// Passengers waiting or riding after the tick.
    pub waiting:        u64,
    pub delivered:      u64,
    pub spawned:        u64,
    pub max_passengers: u64,
}

/// One car's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id:    u16,
    pub tick:      u64,
    pub floor:     u16,
    /// −1 down, 0 idle, +1 up.
    pub direction: i8,
    pub door_open: bool,
    pub load:      u32,
}
