use super::*;
use crate::systems::vector::Vec2;

fn plain() -> BodyOptionsPatch {
    BodyOptionsPatch::new()
}

fn floating() -> BodyOptionsPatch {
    BodyOptionsPatch::new().with_gravity(None)
}

#[test]
fn step_advances_frame_and_ticks_live_bodies() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain());
    let b = world.spawn(300.0, 100.0, &plain());
    world.kill(b).unwrap();

    world.step();
    world.step();

    assert_eq!(world.frame(), 2);
    assert_eq!(world.body(a).unwrap().ticks, 2);
    assert_eq!(world.body(b).unwrap().ticks, 0);
}

#[test]
fn killer_beats_non_killer_in_either_creation_order() {
    for killer_first in [true, false] {
        let mut world = WorldCore::new(800, 600);
        let killer = BodyOptionsPatch::new().with_killer(true).with_gravity(None);
        let (k, n) = if killer_first {
            let k = world.spawn(100.0, 100.0, &killer);
            let n = world.spawn(104.0, 100.0, &floating());
            (k, n)
        } else {
            let n = world.spawn(104.0, 100.0, &floating());
            let k = world.spawn(100.0, 100.0, &killer);
            (k, n)
        };

        world.step();

        assert!(world.entities().is_alive(k), "killer_first={}", killer_first);
        assert!(!world.entities().is_alive(n), "killer_first={}", killer_first);
    }
}

#[test]
fn body_killed_mid_tick_is_not_updated() {
    let mut world = WorldCore::new(800, 600);
    world.spawn(100.0, 100.0, &BodyOptionsPatch::new().with_killer(true).with_gravity(None));
    let victim = world.spawn(104.0, 100.0, &plain());

    world.step();

    let body = world.body(victim).unwrap();
    assert_eq!(body.ticks, 0);
    assert_eq!(body.pos, Vec2::new(104.0, 100.0));
}

#[test]
fn radius_never_changes() {
    let mut world = WorldCore::new(400, 300);
    let a = world.spawn(100.0, 50.0, &plain());
    let b = world.spawn(160.0, 50.0, &plain().with_radius(14.0));
    let c = world.spawn(104.0, 80.0, &plain());
    world.connect(a, b).unwrap();

    for _ in 0..300 {
        world.step();
    }

    assert_eq!(world.body(a).unwrap().radius(), 10.0);
    assert_eq!(world.body(b).unwrap().radius(), 14.0);
    assert_eq!(world.body(c).unwrap().radius(), 10.0);
}

#[test]
fn weightless_free_body_stays_put() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(200.0, 150.0, &floating());
    for _ in 0..50 {
        world.step();
    }
    assert_eq!(world.body(a).unwrap().pos, Vec2::new(200.0, 150.0));
}

#[test]
fn hard_rope_shortens_the_pair() {
    let mut world = WorldCore::new(800, 600);
    let patch = floating()
        .with_rope_tension(Some(15.0))
        .with_rope_max_tension(Some(50.0));
    let a = world.spawn(100.0, 100.0, &patch);
    let b = world.spawn(100.0, 200.0, &patch);
    world.connect(a, b).unwrap();

    world.step();

    let d = world.body(a).unwrap().middle().distance(world.body(b).unwrap().middle());
    assert!(d < 100.0);
    assert!((world.body(a).unwrap().pos.y - 108.5).abs() < 1e-4);
}

#[test]
fn landing_on_the_floor_clamps_and_bounces() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(50.0, 300.0, &plain());

    let mut landed = false;
    for _ in 0..200 {
        world.step();
        if world.body(a).unwrap().pos.y >= 595.0 {
            landed = true;
            break;
        }
    }

    assert!(landed);
    let body = world.body(a).unwrap();
    assert_eq!(body.pos.y, 595.0);
    assert_eq!(body.fall_momentum, 0.0);
    assert!(body.bounce_velocity > 0.0);

    world.step();
    assert!(world.body(a).unwrap().pos.y < 595.0);
}

#[test]
fn resized_canvas_moves_the_walls() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(700.0, 100.0, &floating());
    world.set_canvas_size(400, 600);
    world.step();
    assert_eq!(world.body(a).unwrap().pos.x, 395.0);
}

#[test]
fn try_spawn_refuses_occupied_spots() {
    let mut world = WorldCore::new(800, 600);
    world.spawn(100.0, 100.0, &plain());

    assert_eq!(world.try_spawn(103.0, 100.0, &plain()), None);
    assert_eq!(world.body_count(), 1);

    let free = world.try_spawn(200.0, 100.0, &plain());
    assert!(free.is_some());
    assert_eq!(world.body_count(), 2);
}

#[test]
fn probe_reports_overlaps_without_adding_a_body() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain());
    world.spawn(300.0, 100.0, &plain());

    assert_eq!(world.probe(105.0, 100.0, &plain()), vec![a]);
    assert_eq!(world.body_count(), 2);
}

#[test]
fn kill_reports_unknown_and_repeated_kills() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain());

    assert_eq!(world.kill(a), Ok(true));
    assert_eq!(world.kill(a), Ok(false));
    assert_eq!(world.kill(99), Err(EngineError::UnknownBody { id: 99 }));
}

#[test]
fn ids_from_before_a_clear_resolve_to_nothing() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain());
    let b = world.spawn(200.0, 100.0, &plain());
    world.clear();

    let c = world.spawn(100.0, 100.0, &plain());
    assert!(c > b);
    assert_eq!(world.kill(a), Err(EngineError::UnknownBody { id: a }));
    assert!(world.entities().is_alive(c));
}

#[test]
fn loading_a_smaller_snapshot_keeps_ids_increasing() {
    let mut source = WorldCore::new(800, 600);
    source.spawn(10.0, 10.0, &plain());
    let json = source.to_json();

    let mut world = WorldCore::new(800, 600);
    let mut last = 0;
    for i in 0..5 {
        last = world.spawn(40.0 * i as f32, 100.0, &plain());
    }
    assert_eq!(world.load_json(&json), Ok(1));

    let fresh = world.spawn(500.0, 100.0, &plain());
    assert!(fresh > last);
    assert_eq!(world.kill(last), Err(EngineError::UnknownBody { id: last }));
}

#[test]
fn connect_rejects_self_and_unknown() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain());
    assert_eq!(world.connect(a, a), Err(EngineError::SelfConnection { id: a }));
    assert_eq!(world.connect(a, 7), Err(EngineError::UnknownBody { id: 7 }));
}

#[test]
fn placement_builds_and_activates_a_chain() {
    let mut world = WorldCore::new(800, 600);
    world.begin_placement(90.0, 90.0);
    let anchor = world.place_link(100.0, 100.0, true).unwrap();
    let l1 = world.place_link(130.0, 100.0, false).unwrap();
    let l2 = world.place_link(160.0, 100.0, false).unwrap();

    assert_eq!(world.body(l1).unwrap().options.gravity, None);
    assert_eq!(world.connections(l1), vec![anchor, l2]);

    let placed = world.end_placement(160.0, 100.0);
    assert_eq!(placed, vec![anchor, l1, l2]);
    assert!(!world.is_placing());

    let anchor_opts = &world.body(anchor).unwrap().options;
    assert_eq!(anchor_opts.gravity, None);
    assert_eq!(anchor_opts.rope_tension, None);

    let free_opts = &world.body(l2).unwrap().options;
    assert_eq!(free_opts.gravity, Some(0.5));
    assert_eq!(free_opts.rope_tension, Some(20.0));
    assert_eq!(free_opts.rope_max_tension, Some(50.0));

    assert_eq!(world.reachable(anchor), vec![l1, l2]);
}

#[test]
fn anchored_chain_hangs_from_its_anchor() {
    let mut world = WorldCore::new(800, 600);
    world.begin_placement(0.0, 0.0);
    let anchor = world.place_link(100.0, 100.0, true).unwrap();
    world.place_link(120.0, 100.0, false);
    let tail = world.place_link(140.0, 100.0, false).unwrap();
    world.end_placement(140.0, 100.0);

    for _ in 0..500 {
        world.step();
    }

    assert_eq!(world.body(anchor).unwrap().pos, Vec2::new(100.0, 100.0));
    let tail_pos = world.body(tail).unwrap().pos;
    assert!(tail_pos.y > 100.0);
    assert!(tail_pos.distance(Vec2::new(100.0, 100.0)) < 110.0);
}

#[test]
fn click_without_links_spawns_one_default_body() {
    let mut world = WorldCore::new(800, 600);
    world.begin_placement(40.0, 40.0);
    let spawned = world.end_placement(45.0, 40.0);

    assert_eq!(spawned.len(), 1);
    let body = world.body(spawned[0]).unwrap();
    assert_eq!(body.pos, Vec2::new(45.0, 40.0));
    assert_eq!(&body.options, world.defaults());
}

#[test]
fn release_on_press_point_leaves_links_static() {
    let mut world = WorldCore::new(800, 600);
    world.begin_placement(40.0, 40.0);
    let link = world.place_link(200.0, 200.0, false).unwrap();
    let spawned = world.end_placement(40.0, 40.0);

    assert_eq!(spawned.len(), 1);
    assert_ne!(spawned[0], link);
    assert_eq!(world.body(link).unwrap().options.gravity, None);
}

#[test]
fn placement_calls_without_a_session_do_nothing() {
    let mut world = WorldCore::new(800, 600);
    assert_eq!(world.place_link(10.0, 10.0, false), None);
    assert!(world.end_placement(10.0, 10.0).is_empty());
    assert_eq!(world.body_count(), 0);
}

#[test]
fn render_buffers_follow_live_bodies() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(10.0, 20.0, &plain().with_color("#ff0000"));
    let b = world.spawn(100.0, 20.0, &plain().with_color("not a color"));
    let dead = world.spawn(300.0, 20.0, &plain());
    world.connect(a, b).unwrap();
    world.connect(b, dead).unwrap();
    world.kill(dead).unwrap();

    assert_eq!(world.extract_render(), 2);
    assert_eq!(world.circles(), &[10.0, 20.0, 5.0, 100.0, 20.0, 5.0]);
    assert_eq!(world.colors(), &[0xFF00_00FF, crate::domain::color::FALLBACK_COLOR]);
    assert_eq!(world.links(), &[10.0, 20.0, 100.0, 20.0]);

    world.clear();
    assert!(world.circles().is_empty());
    assert_eq!(world.extract_render(), 0);
}

#[test]
fn perf_stats_count_the_tick() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &floating());
    let b = world.spawn(130.0, 100.0, &floating());
    world.spawn(400.0, 100.0, &plain());
    world.connect(a, b).unwrap();

    world.step();
    assert_eq!(world.get_perf_stats().bodies_updated(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.bodies_updated(), 3);
    assert_eq!(stats.rope_pulls(), 2);
    assert_eq!(stats.live_bodies(), 3);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn perf_stats_count_wall_clamps() {
    let mut world = WorldCore::new(800, 600);
    world.enable_perf_metrics(true);
    world.spawn(-20.0, 100.0, &floating());
    world.spawn(900.0, 100.0, &floating());
    world.spawn(400.0, 100.0, &floating());

    world.step();
    assert_eq!(world.get_perf_stats().clamps(), 2);

    world.step();
    assert_eq!(world.get_perf_stats().clamps(), 0);
}

#[test]
fn degenerate_bodies_keep_finite_positions() {
    let mut world = WorldCore::new(800, 600);
    world.spawn(200.0, 200.0, &plain());
    world.spawn(200.0, 200.0, &plain());
    let inverted = plain().with_radius(-10.0);
    let a = world.spawn(300.0, 100.0, &inverted);
    let b = world.spawn(360.0, 100.0, &inverted);
    world.connect(a, b).unwrap();

    for _ in 0..200 {
        world.step();
    }

    for body in world.entities().bodies() {
        assert!(body.pos.x.is_finite() && body.pos.y.is_finite(), "body {}", body.id);
        assert!(body.fall_momentum.is_finite());
        assert!(body.bounce_velocity.is_finite());
    }
    assert_eq!(world.body(a).unwrap().radius(), -10.0);
}

#[test]
fn settings_replace_defaults_and_tuning() {
    let mut world = WorldCore::new(800, 600);
    world
        .load_settings_json(r#"{"defaults":{"radius":20,"gravity":false},"tuning":{"collisionPush":4}}"#)
        .unwrap();

    assert_eq!(world.tuning().collision_push, 4.0);
    let a = world.spawn(100.0, 100.0, &plain());
    assert_eq!(world.body(a).unwrap().radius(), 20.0);
    assert_eq!(world.body(a).unwrap().options.gravity, None);

    let err = world.load_settings_json("{not json").unwrap_err();
    assert!(matches!(err, EngineError::InvalidSettings(_)));
    assert_eq!(world.tuning().collision_push, 4.0);
}

#[test]
fn snapshot_restores_bodies_ids_and_ropes() {
    let mut world = WorldCore::new(800, 600);
    let a = world.spawn(100.0, 100.0, &plain().with_color("#123456"));
    let b = world.spawn(140.0, 100.0, &plain().with_rope_tension(None));
    let c = world.spawn(400.0, 100.0, &plain());
    world.connect(a, b).unwrap();
    for _ in 0..5 {
        world.step();
    }
    world.kill(c).unwrap();

    let json = world.to_json();
    let mut restored = WorldCore::new(800, 600);
    restored.spawn(1.0, 1.0, &plain());
    assert_eq!(restored.load_json(&json), Ok(3));

    for id in [a, b, c] {
        let before = world.body(id).unwrap();
        let after = restored.body(id).unwrap();
        assert_eq!(after.pos, before.pos);
        assert_eq!(after.options, before.options);
        assert_eq!(after.alive, before.alive);
        assert_eq!(after.ticks, before.ticks);
    }
    assert_eq!(restored.connections(a), vec![b]);
    assert_eq!(restored.body_count(), 2);

    let next = restored.spawn(0.0, 0.0, &plain());
    assert!(next > c);
}

#[test]
fn bad_snapshot_leaves_world_untouched() {
    let mut world = WorldCore::new(800, 600);
    world.spawn(100.0, 100.0, &plain());
    let err = world.load_json("[{\"id\": 1}]").unwrap_err();
    assert!(matches!(err, EngineError::InvalidSnapshot(_)));
    assert_eq!(world.body_count(), 1);
}
