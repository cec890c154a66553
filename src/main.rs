//! Flatland collision demo
//!
//! Loads a scene, adapts its bodies into the simulation world, runs a fixed
//! number of steps and logs the contacts found along the way.

use flatland::config::AppConfig;
use flatland_core::{
    Collider2D, ContactLog, ContactStatus, GameObjectBuilder, ObjectKey, PhysicsConfig,
    PhysicsMaterial, Scene, SceneError, SceneTemplate,
};
use flatland_math::Vec3;

/// Scene used when the configured scene file cannot be loaded
fn fallback_scene(config: PhysicsConfig) -> Scene {
    let mut scene = Scene::new("fallback").with_config(config);

    scene.add_object(
        GameObjectBuilder::begin()
            .set_name("floor")
            .set_static(true)
            .set_position(Vec3::new(0.0, -1.0, 0.0))
            .set_collider(Collider2D::new_box(20.0, 2.0))
            .set_material(PhysicsMaterial::WOOD)
            .end(),
    );
    scene.add_object(
        GameObjectBuilder::begin()
            .set_name("crate")
            .set_position(Vec3::new(0.0, 3.0, 0.0))
            .set_velocity(Vec3::new(0.0, -1.0, 0.0))
            .set_collider(Collider2D::new_box(2.0, 2.0))
            .set_rigid_body(1.0, 0.5, 0.0)
            .end(),
    );
    scene.add_object(
        GameObjectBuilder::begin()
            .set_name("slider")
            .set_position(Vec3::new(-8.0, 1.0, 0.0))
            .set_velocity(Vec3::new(2.0, 0.0, 0.0))
            .set_collider(Collider2D::new_box(1.0, 2.0))
            .set_material(PhysicsMaterial::ICE)
            .end(),
    );

    scene
}

fn object_name(scene: &Scene, key: ObjectKey) -> &str {
    scene
        .get(key)
        .and_then(|o| o.name.as_deref())
        .unwrap_or("<unnamed>")
}

fn run(config: &AppConfig) -> Result<(), SceneError> {
    let physics = config.physics.to_physics_config();

    let mut scene = match SceneTemplate::load(&config.scene.path) {
        Ok(template) => template.instantiate(physics),
        Err(e) => {
            log::warn!(
                "Failed to load scene '{}': {}. Using built-in scene.",
                config.scene.path, e
            );
            fallback_scene(physics)
        }
    };

    let bodies = scene.adapt_bodies()?;
    log::info!(
        "Scene '{}': {} objects, {} bodies",
        scene.name, scene.object_count(), bodies
    );

    let mut contacts = ContactLog::new();
    let mut collisions = 0;
    let mut penetrations = 0;

    for step in 0..config.scene.steps {
        contacts.clear();
        scene.step(config.scene.time_step, &mut contacts)?;

        collisions += contacts.count(ContactStatus::Collision);
        penetrations += contacts.count(ContactStatus::Penetration);

        for contact in contacts.contacts() {
            let message = format!(
                "step {}: {} / {} -> {:?}{}",
                step,
                object_name(&scene, contact.a),
                object_name(&scene, contact.b),
                contact.status,
                if contact.sensor { " (sensor)" } else { "" }
            );
            if config.debug.log_contacts {
                log::info!("{}", message);
            } else {
                log::debug!("{}", message);
            }
        }
    }

    log::info!(
        "Ran {} steps: {} collisions, {} penetrations",
        config.scene.steps, collisions, penetrations
    );
    Ok(())
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Flatland");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = run(&config) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}
