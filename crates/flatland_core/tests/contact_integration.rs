//! Integration tests for the collision pipeline
//!
//! These tests drive the whole chain through the public API:
//! 1. Scene templates build objects with colliders and bodies
//! 2. Bodies are adapted into the simulation world
//! 3. Stepping moves objects and classifies contacts
//! 4. Disabled objects are frozen and reported as sensors

use flatland_core::{
    Collider2D, ColliderTemplate, ContactLog, ContactManager, ContactStatus, Contact,
    GameObjectBuilder, ObjectTemplate, PhysicsConfig, PhysicsMaterial, Scene, SceneTemplate,
    Transform2D,
};
use flatland_math::{Vec2, Vec3};
use flatland_physics::SimulationWorld;

fn falling_crate_scene() -> SceneTemplate {
    let mut template = SceneTemplate::new("falling crate");
    template.add_object(
        ObjectTemplate::new(Transform2D::from_position(Vec3::new(0.0, -1.0, 0.0)))
            .with_name("floor")
            .with_static(true)
            .with_collider(ColliderTemplate::Box { width: 10.0, height: 2.0, sensor: false })
            .with_rigid_body(PhysicsMaterial::WOOD),
    );
    template.add_object(
        ObjectTemplate::new(Transform2D::from_position(Vec3::new(0.0, 4.0, 0.0)))
            .with_name("crate")
            .with_velocity(Vec3::new(0.0, -1.0, 0.0))
            .with_collider(ColliderTemplate::Box { width: 2.0, height: 2.0, sensor: false })
            .with_rigid_body(PhysicsMaterial::default()),
    );
    template
}

/// Counts contacts per status
#[derive(Default)]
struct Tally {
    touching: usize,
    penetrating: usize,
}

impl ContactManager for Tally {
    fn on_contact(&mut self, contact: &Contact) {
        match contact.status {
            ContactStatus::Collision => self.touching += 1,
            ContactStatus::Penetration => self.penetrating += 1,
            ContactStatus::None => {}
        }
    }
}

#[test]
fn test_crate_lands_on_floor() {
    let mut scene = falling_crate_scene().instantiate(PhysicsConfig::default());
    assert_eq!(scene.adapt_bodies().unwrap(), 2);

    let (floor, _) = scene.get_by_name("floor").unwrap();
    let (crate_key, _) = scene.get_by_name("crate").unwrap();

    // Crate bottom starts at y = 3, floor top is at y = 0
    let mut log = ContactLog::new();
    for _ in 0..2 {
        assert_eq!(scene.step(1.0, &mut log).unwrap(), 0);
    }

    scene.step(1.0, &mut log).unwrap();
    assert_eq!(log.latest(floor, crate_key), Some(ContactStatus::Collision));

    scene.step(1.0, &mut log).unwrap();
    assert_eq!(log.latest(floor, crate_key), Some(ContactStatus::Penetration));

    // The body followed the transform
    let body = scene.get(crate_key).unwrap().rigid_body.as_ref().unwrap();
    let stored = scene.world().body(body.body_key().unwrap()).unwrap();
    assert_eq!(stored.position, Vec2::new(0.0, 0.0));
}

#[test]
fn test_custom_manager_receives_contacts() {
    let mut scene = Scene::new("tally");
    scene.add_object(
        GameObjectBuilder::begin()
            .set_collider(Collider2D::new_box(2.0, 2.0))
            .end(),
    );
    scene.add_object(
        GameObjectBuilder::begin()
            .set_position(Vec3::new(2.0, 0.0, 0.0))
            .set_collider(Collider2D::new_box(2.0, 2.0))
            .end(),
    );
    scene.add_object(
        GameObjectBuilder::begin()
            .set_position(Vec3::new(-1.0, 0.5, 0.0))
            .set_collider(Collider2D::new_box(2.0, 2.0))
            .end(),
    );

    let mut tally = Tally::default();
    let reported = scene.detect_contacts(&mut tally).unwrap();

    assert_eq!(reported, 2);
    assert_eq!(tally.touching, 1);
    assert_eq!(tally.penetrating, 1);
}

#[test]
fn test_disable_freezes_object_in_place() {
    let mut scene = falling_crate_scene().instantiate(PhysicsConfig::default());
    scene.adapt_bodies().unwrap();
    let (crate_key, _) = scene.get_by_name("crate").unwrap();

    scene.set_enabled(crate_key, false).unwrap();
    for _ in 0..10 {
        scene.step(1.0, &mut ContactLog::new()).unwrap();
    }
    assert_eq!(
        scene.get(crate_key).unwrap().transform.position,
        Vec3::new(0.0, 4.0, 0.0)
    );

    let body = scene.get(crate_key).unwrap().rigid_body.as_ref().unwrap().body_key().unwrap();
    assert!(!scene.world().body(body).unwrap().is_active());
    let fixtures = scene.world().fixtures(body);
    assert!(fixtures.iter().all(|f| scene.world().fixture(*f).unwrap().is_sensor()));

    scene.set_enabled(crate_key, true).unwrap();
    assert!(scene.world().body(body).unwrap().is_active());
    assert!(fixtures.iter().all(|f| !scene.world().fixture(*f).unwrap().is_sensor()));
}

#[test]
fn test_sensor_contacts_flagged() {
    let mut template = SceneTemplate::new("trigger");
    template.add_object(
        ObjectTemplate::new(Transform2D::identity())
            .with_name("zone")
            .with_static(true)
            .with_collider(ColliderTemplate::Box { width: 4.0, height: 4.0, sensor: true }),
    );
    template.add_object(
        ObjectTemplate::new(Transform2D::from_position(Vec3::new(1.0, 1.0, 0.0)))
            .with_name("player")
            .with_collider(ColliderTemplate::Box { width: 1.0, height: 1.0, sensor: false }),
    );

    let scene = template.instantiate(PhysicsConfig::default());
    let mut log = ContactLog::new();
    scene.detect_contacts(&mut log).unwrap();

    assert_eq!(log.len(), 1);
    let contact = log.contacts()[0];
    assert!(contact.sensor);
    assert_eq!(contact.status, ContactStatus::Penetration);
}

#[test]
fn test_template_round_trip_through_file() {
    let template = falling_crate_scene();
    let path = std::env::temp_dir().join("flatland_contact_integration.ron");
    template.save(&path).unwrap();

    let loaded = SceneTemplate::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let mut scene = loaded.instantiate(PhysicsConfig::new(0.001, 0.5));
    assert_eq!(scene.config().contact_epsilon, 0.001);
    assert_eq!(scene.config().proximity_margin, 0.5);
    assert_eq!(scene.object_count(), 2);
    assert_eq!(scene.adapt_bodies().unwrap(), 2);

    let (_, floor) = scene.get_by_name("floor").unwrap();
    assert!(floor.is_static());
    assert_eq!(floor.rigid_body.as_ref().unwrap().material, PhysicsMaterial::WOOD);
}
