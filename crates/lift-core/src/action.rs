//! Car actions and the two action encodings.
//!
//! A controller talks to the environment in one of two shapes:
//!
//! | `ActionMode` | `ActionInput`        | Meaning                                       |
//! |--------------|----------------------|-----------------------------------------------|
//! | `Combined`   | `Combined(idx)`      | one car acts (`idx / 5`), every other car stays |
//! | `PerCar`     | `PerCar(vec)`        | exactly one action per car                    |
//!
//! Decoding is an explicit step ([`ActionMode::decode`]) so the resolver only
//! ever sees a `Vec<Action>` of length `num_cars`.

use crate::{CarId, LiftError, LiftResult};

/// Number of atomic actions available to one car.
pub const ACTIONS_PER_CAR: usize = 5;

/// One atomic command for one car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Action {
    #[default]
    Stay      = 0,
    MoveUp    = 1,
    MoveDown  = 2,
    OpenDoor  = 3,
    CloseDoor = 4,
}

impl Action {
    /// All actions in code order.
    pub const ALL: [Action; ACTIONS_PER_CAR] = [
        Action::Stay,
        Action::MoveUp,
        Action::MoveDown,
        Action::OpenDoor,
        Action::CloseDoor,
    ];

    /// Integer code of this action (0..=4).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_move(self) -> bool {
        matches!(self, Action::MoveUp | Action::MoveDown)
    }
}

impl TryFrom<i64> for Action {
    type Error = LiftError;

    fn try_from(code: i64) -> LiftResult<Action> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Action::ALL.get(i).copied())
            .ok_or(LiftError::UnknownAction(code))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Stay      => "stay",
            Action::MoveUp    => "move_up",
            Action::MoveDown  => "move_down",
            Action::OpenDoor  => "open_door",
            Action::CloseDoor => "close_door",
        })
    }
}

// ── CombinedAction ────────────────────────────────────────────────────────────

/// A single flattened index decoded into `(car, action)`.
///
/// `idx = car * ACTIONS_PER_CAR + action`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CombinedAction {
    pub car:    CarId,
    pub action: Action,
}

impl CombinedAction {
    /// Decode `idx`, clamping it into `[0, num_cars * 5 - 1]` first.
    ///
    /// Out-of-range indices are never an error: negative values act as 0
    /// and oversized values act as the last car's `CloseDoor`.
    pub fn decode(idx: i64, num_cars: usize) -> CombinedAction {
        let max = (num_cars.max(1) * ACTIONS_PER_CAR - 1) as i64;
        let flat = idx.clamp(0, max) as usize;
        CombinedAction {
            car:    CarId((flat / ACTIONS_PER_CAR) as u16),
            action: Action::ALL[flat % ACTIONS_PER_CAR],
        }
    }

    /// Flatten back into a combined index.
    #[inline]
    pub fn encode(self) -> i64 {
        (self.car.index() * ACTIONS_PER_CAR + self.action.code() as usize) as i64
    }
}

// ── ActionMode / ActionInput ──────────────────────────────────────────────────

/// Which action shape the environment accepts.  Fixed per environment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionMode {
    /// One flattened index per tick; only the addressed car acts.
    #[default]
    Combined,
    /// One action for every car per tick.
    PerCar,
}

impl ActionMode {
    /// Size of the discrete action space.
    ///
    /// `Combined`: `num_cars * 5` choices for the whole tick.
    /// `PerCar`: 5 choices for each car.
    #[inline]
    pub fn action_count(self, num_cars: usize) -> usize {
        match self {
            ActionMode::Combined => num_cars * ACTIONS_PER_CAR,
            ActionMode::PerCar   => ACTIONS_PER_CAR,
        }
    }

    /// Turn one tick's input into exactly `num_cars` actions.
    ///
    /// Fails (without side effects) if the input shape does not match the
    /// mode or the per-car vector has the wrong length.
    pub fn decode(self, input: &ActionInput, num_cars: usize) -> LiftResult<Vec<Action>> {
        match (self, input) {
            (ActionMode::Combined, ActionInput::Combined(idx)) => {
                let decoded = CombinedAction::decode(*idx, num_cars);
                let mut actions = vec![Action::Stay; num_cars];
                actions[decoded.car.index()] = decoded.action;
                Ok(actions)
            }
            (ActionMode::PerCar, ActionInput::PerCar(actions)) => {
                if actions.len() != num_cars {
                    return Err(LiftError::ActionCountMismatch {
                        expected: num_cars,
                        got:      actions.len(),
                    });
                }
                Ok(actions.clone())
            }
            (mode, input) => Err(LiftError::ActionShape {
                mode,
                got: input.shape_name(),
            }),
        }
    }
}

/// One tick's worth of controller input.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionInput {
    /// Flattened `(car, action)` index for [`ActionMode::Combined`].
    Combined(i64),
    /// One action per car for [`ActionMode::PerCar`].
    PerCar(Vec<Action>),
}

impl ActionInput {
    /// Build a per-car input from raw integer codes, rejecting unknown codes.
    pub fn per_car_from_codes(codes: &[i64]) -> LiftResult<ActionInput> {
        codes
            .iter()
            .map(|&c| Action::try_from(c))
            .collect::<LiftResult<Vec<_>>>()
            .map(ActionInput::PerCar)
    }

    /// Every car stays, in either encoding.
    pub fn idle(mode: ActionMode, num_cars: usize) -> ActionInput {
        match mode {
            ActionMode::Combined => ActionInput::Combined(0),
            ActionMode::PerCar   => ActionInput::PerCar(vec![Action::Stay; num_cars]),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            ActionInput::Combined(_) => "combined index",
            ActionInput::PerCar(_)   => "per-car vector",
        }
    }
}

impl From<CombinedAction> for ActionInput {
    fn from(c: CombinedAction) -> ActionInput {
        ActionInput::Combined(c.encode())
    }
}
