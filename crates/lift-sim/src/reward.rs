//! Reward aggregation.
//!
//! During a tick every reward delta goes through [`TickLedger`], which keeps
//! the running scalar (summed in resolution order), a per-component
//! [`RewardBreakdown`], and the event log.

use lift_core::{CarId, FloorId};
use tracing::trace;

use crate::{PenaltyKind, TickEvent};

/// Where one tick's reward came from.  Components sum to the tick reward
/// (up to floating-point rounding).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RewardBreakdown {
    pub arrivals:         f64,
    pub door_open_move:   f64,
    pub boundary:         f64,
    pub empty_floor_open: f64,
    pub waiting_cost:     f64,

    /// Passengers delivered this tick.
    pub delivered: usize,
    /// Passengers who boarded this tick.
    pub boarded:   usize,
    /// Passengers spawned at the end of this tick.
    pub spawned:   usize,
    /// Backlog the waiting cost was charged on.
    pub backlog:   usize,
    /// Number of soft-failure penalties applied.
    pub penalties: usize,
}

impl RewardBreakdown {
    pub fn total(&self) -> f64 {
        self.arrivals
            + self.door_open_move
            + self.boundary
            + self.empty_floor_open
            + self.waiting_cost
    }
}

/// Accumulates one tick's reward and events.
#[derive(Debug, Default)]
pub(crate) struct TickLedger {
    pub reward:    f64,
    pub breakdown: RewardBreakdown,
    pub events:    Vec<TickEvent>,
}

impl TickLedger {
    pub fn penalise(&mut self, car: CarId, kind: PenaltyKind, amount: f64) {
        trace!(car = car.0, %kind, amount, "penalty");
        self.reward += amount;
        let slot = match kind {
            PenaltyKind::EmptyFloorOpen => &mut self.breakdown.empty_floor_open,
            PenaltyKind::DoorOpenMove   => &mut self.breakdown.door_open_move,
            PenaltyKind::Boundary       => &mut self.breakdown.boundary,
        };
        *slot += amount;
        self.breakdown.penalties += 1;
        self.events.push(TickEvent::Penalty { car, kind, amount });
    }

    pub fn deliver(&mut self, car: CarId, floor: FloorId, count: usize, per_arrival: f64) {
        let amount = per_arrival * count as f64;
        self.reward += amount;
        self.breakdown.arrivals += amount;
        self.breakdown.delivered += count;
        self.events.push(TickEvent::Delivered { car, floor, count });
    }

    pub fn board(&mut self, car: CarId, floor: FloorId, count: usize) {
        self.breakdown.boarded += count;
        self.events.push(TickEvent::Boarded { car, floor, count });
    }

    pub fn charge_backlog(&mut self, backlog: usize, per_waiting: f64) {
        let amount = per_waiting * backlog as f64;
        self.reward += amount;
        self.breakdown.waiting_cost += amount;
        self.breakdown.backlog = backlog;
    }

    #[inline]
    pub fn event(&mut self, event: TickEvent) {
        self.events.push(event);
    }
}
