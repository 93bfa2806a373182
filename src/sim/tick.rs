//! Fixed timestep simulation tick
//!
//! Order matters: positions advance first, body-body collisions are resolved
//! against the advanced positions, and walls are checked last.

use super::collision::resolve_body_collisions;
use super::state::Simulation;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Body pairs whose velocities were exchanged
    pub collisions: usize,
    /// Bodies reflected off at least one wall
    pub wall_hits: usize,
}

/// Advance the simulation by one fixed step
pub fn tick(sim: &mut Simulation) -> TickReport {
    let tick_scale = sim.config().tick_scale();
    let boundary = sim.boundary();

    for (_, body) in sim.bodies.iter_mut() {
        body.integrate(tick_scale);
    }

    let collisions = resolve_body_collisions(&mut sim.bodies, tick_scale);

    let mut wall_hits = 0;
    for (id, body) in sim.bodies.iter_mut() {
        let hits = boundary.resolve(body, &mut sim.rng);
        if hits.any() {
            log::trace!("Wall bounce {:?}: {:?}", id, hits);
            wall_hits += 1;
        }
    }

    sim.advance_clock();
    TickReport {
        collisions,
        wall_hits,
    }
}

impl Simulation {
    /// Advance by one fixed step; see [`tick`]
    pub fn tick(&mut self) -> TickReport {
        tick(self)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::{BoundaryMode, SimConfig};
    use crate::sim::{BallColor, Body, BodyId};

    fn scenario_config() -> SimConfig {
        SimConfig {
            tick_rate: 1.0,
            boundary: BoundaryMode::Deterministic,
            ..Default::default()
        }
    }

    fn place(sim: &mut Simulation, x: f32, y: f32, vx: f32, vy: f32) -> BodyId {
        sim.registry_mut().insert(Body::new(
            Vec2::new(x, y),
            Vec2::new(vx, vy),
            40.0,
            BallColor::Green,
        ))
    }

    #[test]
    fn test_tick_integrates_positions() {
        let config = SimConfig {
            tick_rate: 2.0,
            ..scenario_config()
        };
        let mut sim = Simulation::empty(config, 1).unwrap();
        let id = place(&mut sim, 600.0, 450.0, 1.5, -2.0);

        let report = sim.tick();
        assert_eq!(report, TickReport::default());
        assert_eq!(sim.registry().get(id).unwrap().pos, Vec2::new(603.0, 446.0));
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn test_approaching_bodies_separate_without_tunneling() {
        let mut sim = Simulation::empty(scenario_config(), 1).unwrap();
        let resting = place(&mut sim, 600.0, 450.0, 0.0, 0.0);
        let mover = place(&mut sim, 600.0, 600.0, 0.0, -3.0);

        let mut collided = false;
        for _ in 0..40 {
            let report = sim.tick();
            if report.collisions > 0 {
                collided = true;
                break;
            }
        }
        assert!(collided);

        let a = sim.registry().get(resting).unwrap().clone();
        let b = sim.registry().get(mover).unwrap().clone();
        // Mover has handed its normal velocity to the resting body
        assert!(b.vel.y >= -1e-4);
        assert!(a.vel.y < 0.0);
        // Caught before the disks interpenetrated
        assert!(a.pos.distance(b.pos) > a.radius + b.radius);

        // Next tick they drift apart and no further exchange happens
        let report = sim.tick();
        assert_eq!(report.collisions, 0);
        let a2 = sim.registry().get(resting).unwrap();
        let b2 = sim.registry().get(mover).unwrap();
        assert!(a2.pos.distance(b2.pos) > a.pos.distance(b.pos));
    }

    #[test]
    fn test_overlapping_pair_exchanges_every_tick() {
        // Disks start 10 units into each other; nothing pushes them apart
        let mut sim = Simulation::empty(scenario_config(), 1).unwrap();
        let resting = place(&mut sim, 600.0, 450.0, 0.0, 0.0);
        let mover = place(&mut sim, 600.0, 520.0, 0.0, -3.0);

        let report = sim.tick();
        assert_eq!(report.collisions, 1);
        let a = sim.registry().get(resting).unwrap();
        let b = sim.registry().get(mover).unwrap();
        // Normal points from the mover toward the resting body (-y)
        assert!(b.vel.y >= 0.0);
        assert_eq!(a.vel, Vec2::new(0.0, -3.0));

        // The pair stays inside the widened radius and keeps handing the
        // normal velocity back and forth, creeping upward together
        for step in 0..10 {
            let report = sim.tick();
            assert_eq!(report.collisions, 1);

            let a = sim.registry().get(resting).unwrap();
            let b = sim.registry().get(mover).unwrap();
            assert_eq!(a.vel.y + b.vel.y, -3.0);
            let mover_moving = step % 2 == 0;
            assert_eq!(b.vel.y, if mover_moving { -3.0 } else { 0.0 });
            let dist = a.pos.distance(b.pos);
            assert!(dist >= 67.0 && dist <= 70.0);
        }
    }

    #[test]
    fn test_wall_bounce_at_radius() {
        let mut sim = Simulation::empty(scenario_config(), 1).unwrap();
        let id = place(&mut sim, 44.0, 450.0, -4.0, 0.0);

        // Lands exactly at x = radius, then reflects
        let report = sim.tick();
        let body = sim.registry().get(id).unwrap();
        assert_eq!(body.pos.x, 40.0);
        assert_eq!(report.wall_hits, 1);
        assert_eq!(body.vel, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_population_stays_in_arena() {
        let mut sim = Simulation::new(scenario_config(), 2024).unwrap();

        for _ in 0..500 {
            sim.tick();
        }

        // Wall handling is best effort, but every disk still touches the arena
        let (width, height) = (sim.config().width, sim.config().height);
        for view in sim.list_bodies() {
            assert!(view.pos.x > -view.radius && view.pos.x < width + view.radius);
            assert!(view.pos.y > -view.radius && view.pos.y < height + view.radius);
        }
        assert_eq!(sim.list_bodies().len(), 7);
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut a = Simulation::new(SimConfig::default(), 77).unwrap();
        let mut b = Simulation::new(SimConfig::default(), 77).unwrap();

        for step in 0..50 {
            a.tick();
            b.tick();
            if step % 10 == 0 {
                let target = a.list_bodies()[0].pos;
                a.pointer_down(target.x, target.y).unwrap();
                b.pointer_down(target.x, target.y).unwrap();
            }
        }

        assert_eq!(a.current_score(), b.current_score());
        assert_eq!(a.list_bodies(), b.list_bodies());
    }
}
