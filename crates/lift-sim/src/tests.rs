//! Integration tests for lift-sim.

use lift_core::{
    Action, ActionInput, ActionMode, CarId, Direction, EnvConfig, FloorId, LiftError,
    RewardConfig, Tick,
};
use lift_policy::{CollectiveController, Controller, ControlContext, UnrestrictedBoarding};
use lift_state::{CarStore, FloorStore, Observation};

use crate::{
    ElevatorEnv, EnvBatch, EnvBuilder, EnvObserver, EpisodeSummary, NoopObserver, PenaltyKind,
    SimError, StepInfo, StepResult, TickEvent, run_episode,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// No random arrivals: passengers are placed by hand.
fn scripted_config(num_floors: usize, num_cars: usize) -> EnvConfig {
    EnvConfig {
        num_floors,
        num_cars,
        capacity: 10,
        max_steps: 100,
        passenger_spawn_rate: 0.0,
        action_mode: ActionMode::PerCar,
        rewards: RewardConfig::default(),
        seed: 1,
        output_interval_ticks: 1,
    }
}

fn scripted_env(num_floors: usize, num_cars: usize) -> ElevatorEnv {
    let mut env = EnvBuilder::new(scripted_config(num_floors, num_cars)).build().unwrap();
    env.reset(None);
    env
}

fn busy_config(seed: u64) -> EnvConfig {
    EnvConfig {
        num_floors: 8,
        num_cars: 3,
        capacity: 4,
        max_steps: 400,
        passenger_spawn_rate: 0.3,
        action_mode: ActionMode::PerCar,
        seed,
        ..EnvConfig::default()
    }
}

fn wait(env: &mut ElevatorEnv, origin: u16, destination: u16) {
    env.floors.push_waiting(FloorId(origin), FloorId(destination));
    env.floors.refresh_all();
}

fn per_car(actions: &[Action]) -> ActionInput {
    ActionInput::PerCar(actions.to_vec())
}

fn step(env: &mut ElevatorEnv, actions: &[Action]) -> StepResult {
    env.step(&per_car(actions)).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Check every structural invariant of the stores.
fn assert_consistent(cars: &CarStore, floors: &FloorStore, capacity: usize) {
    for car in cars.car_ids() {
        let i = car.index();
        assert!(cars.floor[i].index() < floors.count, "car {car} out of building");
        assert!(cars.load(car) <= capacity, "car {car} over capacity");
        for f in 0..floors.count {
            let wanted = cars.destinations[i].contains(&FloorId(f as u16));
            assert_eq!(cars.car_calls[i][f], wanted, "car {car} call for floor {f}");
        }
    }
    for floor in floors.floor_ids() {
        let waiting = floors.waiting_at(floor);
        assert!(waiting.iter().all(|&d| d != floor), "passenger bound for own floor");
        assert_eq!(floors.hall_up()[floor.index()], waiting.iter().any(|&d| d > floor));
        assert_eq!(floors.hall_down()[floor.index()], waiting.iter().any(|&d| d < floor));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_empty_unreset_env() {
        let env = EnvBuilder::new(busy_config(3)).build().unwrap();
        assert_eq!(env.tick(), Tick::ZERO);
        assert_eq!(env.total_passengers(), 0);
        assert_eq!(env.cars().count, 3);
        assert_eq!(env.floors().count, 8);
    }

    #[test]
    fn seed_override_lands_in_config() {
        let env = EnvBuilder::new(busy_config(3)).seed(99).build().unwrap();
        assert_eq!(env.config().seed, 99);
    }

    #[test]
    fn rejects_zero_floors() {
        let cfg = EnvConfig { num_floors: 0, ..EnvConfig::default() };
        assert!(matches!(EnvBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_zero_cars() {
        let cfg = EnvConfig { num_cars: 0, ..EnvConfig::default() };
        assert!(matches!(EnvBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_negative_spawn_rate() {
        let cfg = EnvConfig { passenger_spawn_rate: -0.1, ..EnvConfig::default() };
        assert!(matches!(EnvBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn cars_start_at_ground_closed_and_empty() {
        let mut env = EnvBuilder::new(busy_config(5)).build().unwrap();
        let (obs, info) = env.reset(Some(5));
        for c in &obs.cars {
            assert_eq!(c.floor, FloorId::GROUND);
            assert_eq!(c.direction, Direction::Idle);
            assert!(!c.door_open);
            assert_eq!(c.load, 0);
        }
        assert_eq!(info.step, 0);
        assert_eq!(info.waiting, env.floors().total_waiting());
        assert_eq!(info.max_passengers, info.waiting);
    }

    #[test]
    fn reset_with_same_seed_is_reproducible() {
        let mut env = EnvBuilder::new(busy_config(5)).build().unwrap();
        let (a, _) = env.reset(Some(11));
        let waiting_a: Vec<Vec<FloorId>> =
            env.floors().floor_ids().map(|f| env.floors().waiting_at(f).to_vec()).collect();
        let (b, _) = env.reset(Some(11));
        let waiting_b: Vec<Vec<FloorId>> =
            env.floors().floor_ids().map(|f| env.floors().waiting_at(f).to_vec()).collect();
        assert_eq!(a, b);
        assert_eq!(waiting_a, waiting_b);
    }

    #[test]
    fn reset_clears_previous_episode() {
        let mut env = scripted_env(5, 1);
        wait(&mut env, 0, 3);
        step(&mut env, &[Action::OpenDoor]);
        step(&mut env, &[Action::CloseDoor]);
        step(&mut env, &[Action::MoveUp]);
        let (obs, info) = env.reset(None);
        assert_eq!(obs.cars[0].floor, FloorId::GROUND);
        assert_eq!(obs.cars[0].load, 0);
        assert!(obs.car_calls[0].iter().all(|&c| !c));
        assert_eq!(info.step, 0);
        assert_eq!(env.tick(), Tick::ZERO);
        assert_eq!(env.total_passengers(), 0);
    }
}

// ── Single-car trip ───────────────────────────────────────────────────────────

#[cfg(test)]
mod trip_tests {
    use super::*;

    #[test]
    fn pick_up_carry_and_deliver() {
        let mut env = scripted_env(5, 1);
        wait(&mut env, 0, 2);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.observation.cars[0].load, 1);
        assert!(r.observation.car_calls[0][2]);
        assert!(!r.observation.hall_up[0]);
        assert!(approx(r.reward, -0.1));

        assert!(approx(step(&mut env, &[Action::CloseDoor]).reward, -0.1));
        assert!(approx(step(&mut env, &[Action::MoveUp]).reward, -0.1));
        let r = step(&mut env, &[Action::MoveUp]);
        assert_eq!(r.observation.cars[0].floor, FloorId(2));
        assert_eq!(r.observation.cars[0].direction, Direction::Up);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert!(approx(r.reward, 10.0));
        assert_eq!(r.breakdown.delivered, 1);
        assert_eq!(r.observation.cars[0].load, 0);
        assert!(!r.observation.car_calls[0][2]);
        assert_eq!(r.info.waiting, 0);
        assert_eq!(r.info.step, 5);
    }

    #[test]
    fn duplicate_destinations_alight_together() {
        let mut env = scripted_env(5, 1);
        wait(&mut env, 0, 1);
        wait(&mut env, 0, 1);
        wait(&mut env, 0, 3);
        step(&mut env, &[Action::OpenDoor]);
        step(&mut env, &[Action::CloseDoor]);
        step(&mut env, &[Action::MoveUp]);
        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.breakdown.delivered, 2);
        assert_eq!(r.observation.cars[0].load, 1);
        assert!(!r.observation.car_calls[0][1]);
        assert!(r.observation.car_calls[0][3]);
        // Two arrivals, one rider still aboard.
        assert!(approx(r.reward, 20.0 - 0.1));
    }

    #[test]
    fn alight_happens_before_boarding() {
        let mut env = scripted_env(5, 1);
        env.cars.board(CarId(0), FloorId(1));
        wait(&mut env, 1, 3);
        step(&mut env, &[Action::MoveUp]);
        let r = step(&mut env, &[Action::OpenDoor]);
        let kinds: Vec<&TickEvent> = r.events_for(CarId(0)).collect();
        assert_eq!(
            kinds,
            vec![
                &TickEvent::DoorOpened { car: CarId(0), floor: FloorId(1) },
                &TickEvent::Delivered { car: CarId(0), floor: FloorId(1), count: 1 },
                &TickEvent::Boarded { car: CarId(0), floor: FloorId(1), count: 1 },
            ]
        );
    }
}

// ── Boarding ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boarding_tests {
    use super::*;

    #[test]
    fn capacity_limits_boarding_in_arrival_order() {
        let mut env = EnvBuilder::new(EnvConfig { capacity: 2, ..scripted_config(5, 1) })
            .build()
            .unwrap();
        env.reset(None);
        wait(&mut env, 0, 3);
        wait(&mut env, 0, 1);
        wait(&mut env, 0, 2);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.breakdown.boarded, 2);
        assert_eq!(env.cars().destinations[0], vec![FloorId(3), FloorId(1)]);
        assert_eq!(env.floors().waiting_at(FloorId(0)), &[FloorId(2)]);
        assert!(r.observation.hall_up[0]);
    }

    #[test]
    fn overflow_passenger_with_same_destination_keeps_waiting() {
        let mut env = EnvBuilder::new(EnvConfig { capacity: 1, ..scripted_config(5, 1) })
            .build()
            .unwrap();
        env.reset(None);
        wait(&mut env, 0, 3);
        wait(&mut env, 0, 3);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.breakdown.boarded, 1);
        assert_eq!(env.cars().destinations[0], vec![FloorId(3)]);
        assert_eq!(env.floors().waiting_at(FloorId(0)), &[FloorId(3)]);
        assert_eq!(env.total_passengers(), 2);
        assert!(r.observation.hall_up[0]);
    }

    #[test]
    fn preloaded_car_only_fills_remaining_seats() {
        let mut env = EnvBuilder::new(EnvConfig { capacity: 3, ..scripted_config(5, 1) })
            .build()
            .unwrap();
        env.reset(None);
        env.cars.board(CarId(0), FloorId(4));
        env.cars.board(CarId(0), FloorId(4));
        wait(&mut env, 0, 1);
        wait(&mut env, 0, 2);
        wait(&mut env, 0, 3);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.breakdown.boarded, 1);
        assert_eq!(env.cars().load(CarId(0)), 3);
        assert_eq!(env.cars().destinations[0], vec![FloorId(4), FloorId(4), FloorId(1)]);
        assert_eq!(env.floors().waiting_at(FloorId(0)), &[FloorId(2), FloorId(3)]);
        assert_eq!(env.total_passengers(), 5);
    }

    #[test]
    fn moving_car_only_takes_its_direction() {
        let mut env = scripted_env(5, 1);
        step(&mut env, &[Action::MoveUp]);
        step(&mut env, &[Action::MoveUp]);
        wait(&mut env, 2, 0);
        wait(&mut env, 2, 4);

        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(env.cars().destinations[0], vec![FloorId(4)]);
        assert_eq!(env.floors().waiting_at(FloorId(2)), &[FloorId(0)]);
        assert!(!r.observation.hall_up[2]);
        assert!(r.observation.hall_down[2]);
    }

    #[test]
    fn unrestricted_policy_takes_everyone() {
        let mut env = EnvBuilder::new(scripted_config(5, 1))
            .boarding_policy(UnrestrictedBoarding)
            .build()
            .unwrap();
        env.reset(None);
        env.step(&per_car(&[Action::MoveUp])).unwrap();
        env.floors.push_waiting(FloorId(1), FloorId(0));
        env.floors.push_waiting(FloorId(1), FloorId(4));
        env.floors.refresh_all();

        let r = env.step(&per_car(&[Action::OpenDoor])).unwrap();
        assert_eq!(r.breakdown.boarded, 2);
        assert_eq!(env.floors().total_waiting(), 0);
    }

    #[test]
    fn reopening_an_open_door_does_nothing() {
        let mut env = scripted_env(5, 1);
        step(&mut env, &[Action::OpenDoor]);
        wait(&mut env, 0, 2);
        let r = step(&mut env, &[Action::OpenDoor]);
        assert_eq!(r.breakdown.boarded, 0);
        assert_eq!(r.breakdown.penalties, 0);
        assert_eq!(env.floors().total_waiting(), 1);
    }
}

// ── Penalties ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod penalty_tests {
    use super::*;

    #[test]
    fn move_below_ground_is_penalised_and_blocked() {
        let mut env = scripted_env(5, 1);
        let r = step(&mut env, &[Action::MoveDown]);
        assert!(approx(r.reward, -1.0));
        assert_eq!(r.observation.cars[0].floor, FloorId::GROUND);
        assert_eq!(r.observation.cars[0].direction, Direction::Idle);
    }

    #[test]
    fn move_above_roof_is_penalised_and_blocked() {
        let mut env = scripted_env(3, 1);
        step(&mut env, &[Action::MoveUp]);
        step(&mut env, &[Action::MoveUp]);
        let r = step(&mut env, &[Action::MoveUp]);
        assert!(approx(r.reward, -1.0));
        assert_eq!(r.observation.cars[0].floor, FloorId(2));
    }

    #[test]
    fn empty_floor_open_is_penalised() {
        let mut env = scripted_env(5, 1);
        let r = step(&mut env, &[Action::OpenDoor]);
        assert!(approx(r.reward, -0.5));
        assert!(r.observation.cars[0].door_open);
        assert_eq!(r.breakdown.penalties, 1);
    }

    #[test]
    fn moving_with_door_open_is_penalised_and_blocked() {
        let mut env = scripted_env(5, 1);
        step(&mut env, &[Action::OpenDoor]);
        let r = step(&mut env, &[Action::MoveUp]);
        assert!(approx(r.reward, -10.0));
        assert_eq!(r.observation.cars[0].floor, FloorId::GROUND);
        assert!(r.observation.cars[0].door_open);
    }

    #[test]
    fn open_door_at_boundary_takes_both_penalties() {
        let mut env = scripted_env(5, 1);
        step(&mut env, &[Action::OpenDoor]);
        let r = step(&mut env, &[Action::MoveDown]);
        assert!(approx(r.reward, -11.0));
        assert_eq!(r.breakdown.penalties, 2);
    }

    #[test]
    fn single_floor_building_blocks_every_move() {
        let mut env = EnvBuilder::new(EnvConfig {
            passenger_spawn_rate: 5.0,
            ..scripted_config(1, 1)
        })
        .build()
        .unwrap();
        env.reset(None);
        for _ in 0..10 {
            let r = env.step(&per_car(&[Action::MoveUp])).unwrap();
            assert!(approx(r.reward, -1.0));
            assert_eq!(r.breakdown.spawned, 0);
        }
        assert_eq!(env.total_passengers(), 0);
    }

    #[test]
    fn breakdown_sums_to_reward() {
        let mut env = EnvBuilder::new(busy_config(8)).build().unwrap();
        env.reset(None);
        let mut ctl = CollectiveController::new();
        let mut obs = env.observation();
        for _ in 0..100 {
            let ctx = ControlContext::new(env.tick(), ActionMode::PerCar, 4, &obs);
            let input = ctl.act(&ctx);
            let r = env.step(&input).unwrap();
            assert!((r.breakdown.total() - r.reward).abs() < 1e-6);
            obs = r.observation;
        }
    }
}

// ── Input handling ────────────────────────────────────────────────────────────

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn wrong_per_car_length_errors_without_mutation() {
        let mut env = scripted_env(5, 2);
        wait(&mut env, 0, 3);
        let before = env.observation();
        let err = env.step(&per_car(&[Action::OpenDoor])).unwrap_err();
        assert!(matches!(
            err,
            SimError::Input(LiftError::ActionCountMismatch { expected: 2, got: 1 })
        ));
        assert_eq!(env.observation(), before);
        assert_eq!(env.tick(), Tick::ZERO);
    }

    #[test]
    fn wrong_shape_errors() {
        let mut env = scripted_env(5, 2);
        let err = env.step(&ActionInput::Combined(3)).unwrap_err();
        assert!(matches!(err, SimError::Input(LiftError::ActionShape { .. })));
    }

    #[test]
    fn combined_index_addresses_one_car() {
        let mut env = EnvBuilder::new(EnvConfig {
            action_mode: ActionMode::Combined,
            ..scripted_config(5, 2)
        })
        .build()
        .unwrap();
        env.reset(None);

        // 6 = car 1, action 1 (move up).
        let r = env.step(&ActionInput::Combined(6)).unwrap();
        assert_eq!(r.observation.cars[0].floor, FloorId(0));
        assert_eq!(r.observation.cars[1].floor, FloorId(1));
    }

    #[test]
    fn combined_index_is_clamped() {
        let mut env = EnvBuilder::new(EnvConfig {
            action_mode: ActionMode::Combined,
            ..scripted_config(5, 2)
        })
        .build()
        .unwrap();
        env.reset(None);

        // Below range → car 0 stays.
        let r = env.step(&ActionInput::Combined(-40)).unwrap();
        assert!(r.events.is_empty());
        assert!(approx(r.reward, 0.0));

        // Above range → car 1 closes its (already closed) door.
        let r = env.step(&ActionInput::Combined(1_000)).unwrap();
        assert!(r.events.is_empty());
        assert!(!r.observation.cars[1].door_open);
    }

    #[test]
    fn stepping_past_truncation_is_allowed() {
        let mut env = EnvBuilder::new(EnvConfig { max_steps: 3, ..scripted_config(4, 1) })
            .build()
            .unwrap();
        env.reset(None);
        assert!(!step(&mut env, &[Action::Stay]).truncated);
        assert!(!step(&mut env, &[Action::Stay]).truncated);
        let r = step(&mut env, &[Action::Stay]);
        assert!(r.truncated);
        assert!(!r.terminated);
        assert!(r.done());
        let r = step(&mut env, &[Action::Stay]);
        assert!(r.truncated);
        assert_eq!(r.info.step, 4);
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn later_car_sees_floor_after_earlier_car_boarded() {
        let mut env = scripted_env(5, 2);
        wait(&mut env, 0, 3);
        let r = step(&mut env, &[Action::OpenDoor, Action::OpenDoor]);
        assert_eq!(
            r.events,
            vec![
                TickEvent::DoorOpened { car: CarId(0), floor: FloorId(0) },
                TickEvent::Boarded { car: CarId(0), floor: FloorId(0), count: 1 },
                TickEvent::Penalty {
                    car:    CarId(1),
                    kind:   PenaltyKind::EmptyFloorOpen,
                    amount: -0.5,
                },
                TickEvent::DoorOpened { car: CarId(1), floor: FloorId(0) },
            ]
        );
        assert_eq!(r.observation.cars[0].load, 1);
        assert_eq!(r.observation.cars[1].load, 0);
    }

    #[test]
    fn spawns_come_after_car_events() {
        let mut env = EnvBuilder::new(EnvConfig {
            passenger_spawn_rate: 3.0,
            ..scripted_config(4, 1)
        })
        .build()
        .unwrap();
        env.reset(None);
        let r = step(&mut env, &[Action::MoveUp]);
        assert!(matches!(r.events[0], TickEvent::Moved { .. }));
        assert!(r.events[1..].iter().all(|e| matches!(e, TickEvent::Spawned { .. })));
        let spawned: usize = r.events[1..]
            .iter()
            .map(|e| match e {
                TickEvent::Spawned { count, .. } => *count,
                _ => 0,
            })
            .sum();
        assert_eq!(spawned, r.breakdown.spawned);
    }
}

// ── Long runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    fn drive(env: &mut ElevatorEnv, ticks: usize, mut check: impl FnMut(&ElevatorEnv, &StepResult)) {
        let mut ctl = CollectiveController::new();
        let mut obs = env.observation();
        let mode = env.config().action_mode;
        let capacity = env.config().capacity;
        for _ in 0..ticks {
            let input = {
                let ctx = ControlContext::new(env.tick(), mode, capacity, &obs);
                ctl.act(&ctx)
            };
            let r = env.step(&input).unwrap();
            check(&*env, &r);
            obs = r.observation;
        }
    }

    #[test]
    fn invariants_hold_under_collective_control() {
        for seed in [1, 2, 3] {
            let mut env = EnvBuilder::new(busy_config(seed)).build().unwrap();
            env.reset(None);
            assert_consistent(env.cars(), env.floors(), 4);
            drive(&mut env, 400, |env, r| {
                assert_consistent(env.cars(), env.floors(), 4);
                assert_eq!(r.observation, env.observation());
                assert!(r.info.max_passengers >= r.info.waiting);
            });
        }
    }

    #[test]
    fn invariants_hold_in_combined_mode() {
        let cfg = EnvConfig { action_mode: ActionMode::Combined, ..busy_config(4) };
        let mut env = EnvBuilder::new(cfg).build().unwrap();
        env.reset(None);
        drive(&mut env, 400, |env, _| assert_consistent(env.cars(), env.floors(), 4));
    }

    #[test]
    fn passengers_are_conserved() {
        let mut env = EnvBuilder::new(busy_config(6)).build().unwrap();
        let (_, info) = env.reset(None);
        let mut outstanding = info.waiting;
        let mut delivered = 0;
        drive(&mut env, 400, |_, r| {
            outstanding = outstanding + r.breakdown.spawned - r.breakdown.delivered;
            delivered += r.breakdown.delivered;
            assert_eq!(r.info.waiting, outstanding);
        });
        assert!(delivered > 0);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = |seed| {
            let mut env = EnvBuilder::new(busy_config(seed)).build().unwrap();
            env.reset(None);
            let mut trace: Vec<(f64, Observation)> = Vec::new();
            drive(&mut env, 200, |_, r| trace.push((r.reward, r.observation.clone())));
            trace
        };
        assert_eq!(run(21), run(21));
        assert_ne!(run(21), run(22));
    }

    #[test]
    fn zero_spawn_rate_keeps_building_empty() {
        let mut env = scripted_env(6, 2);
        for _ in 0..50 {
            let r = step(&mut env, &[Action::Stay, Action::Stay]);
            assert!(approx(r.reward, 0.0));
            assert_eq!(r.breakdown.spawned, 0);
        }
        assert_eq!(env.total_passengers(), 0);
        assert_eq!(env.max_passengers(), 0);
    }
}

// ── Episode runner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        resets:    usize,
        starts:    usize,
        ends:      usize,
        snapshots: Vec<u64>,
        finished:  Option<EpisodeSummary>,
        reward:    f64,
    }

    impl EnvObserver for Counter {
        fn on_reset(&mut self, _: &Observation, _: &StepInfo) {
            self.resets += 1;
        }
        fn on_tick_start(&mut self, _: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _: Tick, result: &StepResult) {
            self.ends += 1;
            self.reward += result.reward;
        }
        fn on_snapshot(&mut self, tick: Tick, _: &CarStore, _: &FloorStore) {
            self.snapshots.push(tick.0);
        }
        fn on_episode_end(&mut self, summary: &EpisodeSummary) {
            self.finished = Some(*summary);
        }
    }

    #[test]
    fn hooks_fire_for_every_tick() {
        let cfg = EnvConfig { max_steps: 5, output_interval_ticks: 2, ..busy_config(2) };
        let mut env = EnvBuilder::new(cfg).build().unwrap();
        let mut obs = Counter::default();
        let summary =
            run_episode(&mut env, &mut CollectiveController::new(), &mut obs, None).unwrap();

        assert_eq!(obs.resets, 1);
        assert_eq!(obs.starts, 5);
        assert_eq!(obs.ends, 5);
        assert_eq!(obs.snapshots, vec![0, 2, 4]);
        assert_eq!(obs.finished, Some(summary));
        assert_eq!(summary.ticks, 5);
        assert!(approx(obs.reward, summary.total_reward));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let cfg = EnvConfig { max_steps: 5, output_interval_ticks: 0, ..busy_config(2) };
        let mut env = EnvBuilder::new(cfg).build().unwrap();
        let mut obs = Counter::default();
        run_episode(&mut env, &mut CollectiveController::new(), &mut obs, None).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn seeded_episodes_repeat() {
        let mut env = EnvBuilder::new(busy_config(2)).build().unwrap();
        let mut ctl = CollectiveController::new();
        let a = run_episode(&mut env, &mut ctl, &mut NoopObserver, Some(77)).unwrap();
        let b = run_episode(&mut env, &mut ctl, &mut NoopObserver, Some(77)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ticks, 400);
        assert!(a.delivered > 0);
    }

    #[test]
    fn collective_beats_idle() {
        let mut env = EnvBuilder::new(busy_config(9)).build().unwrap();
        let busy = run_episode(&mut env, &mut CollectiveController::new(), &mut NoopObserver, Some(9))
            .unwrap();
        let idle = run_episode(
            &mut env,
            &mut lift_policy::IdleController,
            &mut NoopObserver,
            Some(9),
        )
        .unwrap();
        assert_eq!(idle.delivered, 0);
        assert!(busy.total_reward > idle.total_reward);
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn batch_matches_individual_envs() {
        let cfg = busy_config(31);
        let mut batch = EnvBatch::new(cfg.clone(), 3).unwrap();
        let starts = batch.reset_all();

        let mut singles: Vec<ElevatorEnv> = batch
            .seeds()
            .iter()
            .map(|&s| EnvBuilder::new(cfg.clone()).seed(s).build().unwrap())
            .collect();
        for (env, (obs, _)) in singles.iter_mut().zip(&starts) {
            let (single_obs, _) = env.reset(None);
            assert_eq!(&single_obs, obs);
        }

        let script = [Action::MoveUp, Action::OpenDoor, Action::CloseDoor, Action::MoveDown];
        for &a in script.iter().cycle().take(40) {
            let input = per_car(&[a, Action::Stay, a]);
            let inputs = vec![input.clone(); 3];
            let results = batch.step_all(&inputs).unwrap();
            for (env, r) in singles.iter_mut().zip(&results) {
                let single = env.step(&input).unwrap();
                assert_eq!(single.observation, r.observation);
                assert!(approx(single.reward, r.reward));
            }
        }
    }

    #[test]
    fn members_get_distinct_seeds() {
        let batch = EnvBatch::new(busy_config(31), 4).unwrap();
        let mut seeds = batch.seeds().to_vec();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 4);
    }

    #[test]
    fn input_count_mismatch_errors() {
        let mut batch = EnvBatch::new(busy_config(31), 2).unwrap();
        batch.reset_all();
        let err = batch.step_all(&[ActionInput::idle(ActionMode::PerCar, 3)]).unwrap_err();
        assert!(matches!(err, SimError::BatchSizeMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn one_bad_input_leaves_batch_untouched() {
        let mut batch = EnvBatch::new(busy_config(31), 2).unwrap();
        batch.reset_all();
        let inputs = vec![ActionInput::idle(ActionMode::PerCar, 3), ActionInput::Combined(0)];
        assert!(batch.step_all(&inputs).is_err());
        assert!(batch.envs().iter().all(|e| e.tick() == Tick::ZERO));
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert!(matches!(EnvBatch::new(busy_config(1), 0), Err(SimError::Config(_))));
    }
}
