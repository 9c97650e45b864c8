use tilekin::{
    BodyBuffer, Breakable, ContactTags, Direction, Entity, EntityId, Kinetic, PhysicsConfig,
    Simulation, TileMap, Transform, Walk,
};

fn solid_tile(sim: &mut Simulation, gx: i32, gy: i32) -> EntityId {
    let size = sim.config().tile_size;
    let id = sim.next_id();
    let tile = Entity::new(id)
        .with_tag("tile")
        .with_transform(Transform::new(gx as f32 * size, gy as f32 * size, size, size))
        .solid();
    sim.spawn_tile(tile, gx, gy)
}

/// 10x6 room: floor on row 5, one wall block on each side at row 4.
fn walled_room() -> Simulation {
    let mut sim = Simulation::new(PhysicsConfig::default());
    sim.set_tiles(TileMap::new(10, 6));
    for gx in 0..10 {
        solid_tile(&mut sim, gx, 5);
    }
    solid_tile(&mut sim, 1, 4);
    solid_tile(&mut sim, 8, 4);
    sim
}

#[test]
fn walker_patrols_between_walls() {
    let mut sim = walled_room();
    let walker = sim.next_id();
    sim.spawn(
        Entity::new(walker)
            .with_tag("goomba")
            .with_transform(Transform::new(48.0, 64.0, 16.0, 16.0))
            .with_kinetic(Kinetic::new())
            .with_walk(Walk::new(1.0))
            .with_gravity()
            .solid(),
    );

    let mut flips = 0;
    let mut last_speed = 1.0;
    for _ in 0..200 {
        sim.tick();
        let e = sim.scene.get(walker).unwrap();
        let t = e.transform.unwrap();
        assert_eq!(t.bottom(), 80.0, "walker left the floor at {:?}", t);
        assert!(t.left() >= 32.0 && t.right() <= 128.0, "walker went through a wall: {:?}", t);

        let speed = e.walk.unwrap().speed;
        if speed != last_speed {
            flips += 1;
            last_speed = speed;
        }
    }

    assert_eq!(flips, 2);
    assert_eq!(last_speed, 1.0);

    let mut buf = BodyBuffer::new();
    buf.fill(&sim.scene);
    assert_eq!(buf.instance_count() as usize, sim.scene.len());
}

#[test]
fn brick_bumps_when_hit_from_below() {
    let mut sim = Simulation::new(PhysicsConfig::default());
    sim.set_tiles(TileMap::new(8, 8));
    let brick = sim.next_id();
    sim.spawn_tile(
        Entity::new(brick)
            .with_tag("brick")
            .with_transform(Transform::new(48.0, 16.0, 16.0, 16.0))
            .with_breakable(Breakable::bump(2.0, 3))
            .solid(),
        3,
        1,
    );
    let player = sim.next_id();
    sim.spawn(
        Entity::new(player)
            .with_tag("player")
            .with_transform(Transform::new(48.0, 34.0, 16.0, 16.0))
            .with_kinetic(Kinetic::new().with_speed(glam::Vec2::new(0.0, -6.0)))
            .with_gravity()
            .solid(),
    );

    sim.tick();
    let hit = sim.contacts().iter().find(|c| c.obstacle == brick).copied().unwrap();
    assert_eq!(hit.mover, player);
    assert_eq!(hit.direction, Direction::Top);
    assert!(hit.tile);
    let p = sim.scene.get(player).unwrap();
    assert_eq!(p.transform.unwrap().top(), 32.0);
    assert!(p.contacts.has(ContactTags::TOP));
    assert!(sim.scene.get(brick).unwrap().contacts.has(ContactTags::BOTTOM));

    sim.tick();
    assert_eq!(sim.scene.get(brick).unwrap().transform.unwrap().y, 14.0);

    for _ in 0..6 {
        sim.tick();
    }
    let b = sim.scene.get(brick).unwrap();
    assert_eq!(b.transform.unwrap().y, 16.0);
    assert!(!b.contacts.has(ContactTags::BOTTOM));
    assert_eq!(b.breakable.as_ref().unwrap().progress(), 0);
}

#[test]
fn resting_body_stays_on_floor() {
    let mut sim = walled_room();
    let crate_id = sim.next_id();
    sim.spawn(
        Entity::new(crate_id)
            .with_transform(Transform::new(64.0, 40.0, 16.0, 16.0))
            .with_kinetic(Kinetic::new())
            .with_gravity()
            .solid(),
    );

    for _ in 0..120 {
        sim.tick();
    }

    let e = sim.scene.get(crate_id).unwrap();
    assert_eq!(e.transform.unwrap().bottom(), 80.0);
    assert_eq!(e.kinetic.unwrap().speed_y, 0.0);
    assert!(e.contacts.has(ContactTags::BOTTOM));
    assert!(sim
        .contacts()
        .iter()
        .any(|c| c.mover == crate_id && c.direction == Direction::Bottom));
}
