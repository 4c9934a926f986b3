//! Headless drop demo
//!
//! Builds a small arena (floor, two walls), drops a two-box stack and a free
//! box, launches one projectile and runs three seconds of simulated frames
//! through a fixed timestep. Pass a `.toml` or `.ron` settings file as the
//! first argument to override the physics tunables.

use box_physics::foundation::logging;
use box_physics::foundation::time::{FixedTimestep, Stopwatch};
use box_physics::prelude::*;
use thiserror::Error;

/// Simulated wall-clock length of the run
const RUN_SECONDS: f32 = 3.0;

/// Uneven frame times fed to the accumulator, roughly 60 fps with hitches
const FRAME_TIMES: [f32; 4] = [0.016, 0.017, 0.016, 0.034];

#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to load settings: {0}")]
    Settings(#[from] ConfigError),

    #[error("Invalid scene object: {0}")]
    Scene(#[from] PhysicsError),
}

struct Arena {
    statics: Vec<StaticCollider>,
    entities: Vec<Entity>,
    names: Vec<&'static str>,
}

impl Arena {
    fn build() -> Result<Self, DemoError> {
        let statics = vec![
            StaticCollider::new(Vec3::zeros(), Vec3::new(20.0, 0.1, 20.0))?,
            StaticCollider::new(Vec3::new(-5.0, 2.5, 0.0), Vec3::new(0.2, 5.0, 20.0))?,
            StaticCollider::new(Vec3::new(5.0, 2.5, 0.0), Vec3::new(0.2, 5.0, 20.0))?,
        ];

        for collider in &statics {
            log::debug!("Static collider at {:?} classified as {:?}", collider.position, collider.class());
        }

        let mut arena = Self {
            statics,
            entities: Vec::new(),
            names: Vec::new(),
        };

        arena.add("stack_lower", Transform::from_position(Vec3::new(-2.0, 0.6, 0.0)), 2.0)?;
        arena.add("stack_upper", Transform::from_position(Vec3::new(-2.0, 2.5, 0.0)), 1.0)?;
        arena.add(
            "free_box",
            Transform::from_position_scale(Vec3::new(2.0, 4.0, 1.0), Vec3::new(0.5, 0.5, 0.5)),
            0.5,
        )?;
        arena.add("projectile", Transform::from_position(Vec3::new(-4.0, 0.6, -3.0)), 1.0)?;

        // Marker with no physics; stays where it is placed
        arena.entities.push(Entity::kinematic(Transform::from_position(Vec3::new(0.0, 6.0, 0.0))));
        arena.names.push("marker");

        Ok(arena)
    }

    fn add(&mut self, name: &'static str, transform: Transform, mass: f32) -> Result<(), DemoError> {
        self.entities.push(Entity::dynamic(transform, mass)?);
        self.names.push(name);
        Ok(())
    }

    fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        let index = self.names.iter().position(|n| *n == name)?;
        self.entities.get_mut(index)
    }

    fn log_states(&self) {
        for (name, entity) in self.names.iter().zip(&self.entities) {
            match entity.body() {
                Some(body) => log::info!(
                    "{:<12} pos=({:6.3}, {:6.3}, {:6.3}) vel=({:6.3}, {:6.3}, {:6.3}) grounded={}",
                    name,
                    body.position.x,
                    body.position.y,
                    body.position.z,
                    body.velocity.x,
                    body.velocity.y,
                    body.velocity.z,
                    body.is_grounded()
                ),
                None => log::info!("{:<12} kinematic at {:?}", name, entity.transform.position),
            }
        }
    }
}

fn load_settings() -> Result<PhysicsSettings, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading physics settings from {}", path);
            Ok(PhysicsSettings::load_from_file(&path)?)
        }
        None => {
            log::info!("Using default physics settings");
            Ok(PhysicsSettings::default())
        }
    }
}

fn run() -> Result<(), DemoError> {
    let settings = load_settings()?;
    let mut world = PhysicsWorld::from_settings(&settings);
    let mut arena = Arena::build()?;

    let preview = trajectory_preview(
        settings.launch_speed,
        settings.launch_angle_degrees,
        settings.gravity_magnitude,
        3.0,
        0.1,
    );
    if let Some((range, _)) = preview.last() {
        log::info!(
            "Launch preview: {} samples, horizontal range {:.2}m at {:.1} m/s, {:.1} deg",
            preview.len(),
            range,
            settings.launch_speed,
            settings.launch_angle_degrees
        );
    }

    let mut timestep = FixedTimestep::default();
    let mut stopwatch = Stopwatch::start_new();
    let mut launched = false;
    let mut contacts = FrameReport::default();
    let mut elapsed = 0.0;
    let mut frame = 0usize;

    while elapsed < RUN_SECONDS {
        let frame_dt = FRAME_TIMES[frame % FRAME_TIMES.len()];
        frame += 1;
        elapsed += frame_dt;

        for _ in 0..timestep.advance(frame_dt) {
            // Launch once the projectile has settled on the floor
            if !launched && timestep.simulated_time() >= 1.0 {
                if let Some(body) = arena.entity_mut("projectile").and_then(Entity::body_mut) {
                    PhysicsWorld::launch(
                        body,
                        settings.launch_speed,
                        settings.launch_angle_degrees,
                        &Vec3::new(1.0, 0.0, 0.5),
                    );
                    log::info!("Projectile launched with velocity {:?}", body.velocity);
                }
                launched = true;
            }

            let report = world.step_entities(timestep.step(), &mut arena.entities, &arena.statics);
            contacts.static_contacts += report.static_contacts;
            contacts.pair_contacts += report.pair_contacts;
            contacts.grounded_lost += report.grounded_lost;
        }
    }

    stopwatch.stop();
    log::info!(
        "Simulated {:.2}s in {} steps over {} frames ({:.2} ms wall time)",
        timestep.simulated_time(),
        timestep.total_steps(),
        frame,
        stopwatch.elapsed_millis()
    );
    log::info!(
        "Contacts: {} static, {} pair, {} supports lost",
        contacts.static_contacts,
        contacts.pair_contacts,
        contacts.grounded_lost
    );
    arena.log_states();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting box physics drop demo");

    match run() {
        Ok(()) => {
            log::info!("Drop demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Drop demo failed: {}", e);
            Err(e.into())
        }
    }
}
