use super::{engine_with, seed, single_branch_params};
use crate::branch::BranchState;
use crate::engine::{GrowthEngine, Seed, WorldConfig};
use crate::geom::point;
use crate::params::GrowthParams;

#[test]
fn empty_collection_yields_a_valid_empty_simulation() {
    let mut engine = engine_with(&[], single_branch_params());
    assert!(engine.settled());
    assert!(engine.nodes().is_empty());
    assert_eq!(engine.branch_states().count(), 0);

    engine.step();
    assert_eq!(engine.tick(), 0);
    assert!(engine.nodes().is_empty());
    assert_eq!(engine.hit_test(point(0.0, 0.0)), None);
    assert_eq!(engine.hit_test(engine.world().center()), None);
}

#[test]
fn a_branch_spells_out_its_text_and_settles() {
    let text = "ein Vorfall";
    let mut engine = engine_with(&[seed(0, text)], single_branch_params());
    assert!(!engine.settled());

    let ticks = engine.run(10_000);
    assert!(engine.settled());
    assert!(ticks > 0);
    assert!(!engine.nodes().is_empty());
    assert!(engine.nodes().len() <= text.chars().count());

    let glyphs: String = engine.nodes().iter().map(|n| n.glyph).collect();
    assert!(text.starts_with(&glyphs));
}

#[test]
fn one_character_per_branch_per_tick() {
    let mut engine = engine_with(&[seed(0, "abcdef")], single_branch_params());
    engine.step();
    assert_eq!(engine.nodes().len(), 1);
    engine.step();
    assert_eq!(engine.nodes().len(), 2);
    assert_eq!(engine.nodes()[0].tick, 1);
    assert_eq!(engine.nodes()[1].tick, 2);
}

#[test]
fn consecutive_nodes_advance_by_the_segment_length() {
    let mut engine = engine_with(&[seed(0, "abcdefgh")], single_branch_params());
    engine.run(100);

    let nodes = engine.nodes();
    let expected = 8.0 * 0.75;
    for pair in nodes.windows(2) {
        let gap = (pair[1].position - pair[0].position).length();
        assert!(
            (gap - expected).abs() < 1e-9,
            "gap {gap} should equal segment length {expected}"
        );
    }
}

#[test]
fn identical_seeds_reproduce_identical_geometry() {
    let seeds = vec![seed(0, "erste Meldung"), seed(1, "zweite Meldung")];
    let make = || {
        let mut e = GrowthEngine::new(
            &seeds,
            single_branch_params(),
            WorldConfig::default(),
            42,
        );
        e.run(10_000);
        e
    };
    let a = make();
    let b = make();

    assert_eq!(a.nodes().len(), b.nodes().len());
    for (na, nb) in a.nodes().iter().zip(b.nodes().iter()) {
        assert_eq!(na.glyph, nb.glyph);
        assert_eq!(na.incident, nb.incident);
        assert!((na.position - nb.position).length() < 1e-12);
    }
}

#[test]
fn different_session_seeds_diverge() {
    let seeds = vec![seed(0, "erste Meldung ganz ohne Gabelung")];
    let run_with = |session| {
        let mut e = GrowthEngine::new(
            &seeds,
            single_branch_params(),
            WorldConfig::default(),
            session,
        );
        e.run(10_000);
        e.nodes()
            .iter()
            .map(|n| (n.position.x, n.position.y))
            .collect::<Vec<_>>()
    };
    assert_ne!(run_with(1), run_with(2));
}

#[test]
fn max_nodes_per_branch_caps_growth() {
    let params = GrowthParams {
        max_nodes_per_branch: 5,
        ..single_branch_params()
    };
    let mut engine = engine_with(&[seed(0, "eine sehr lange Meldung ohne Ende")], params);
    engine.run(10_000);
    assert!(engine.settled());
    assert_eq!(engine.nodes().len(), 5);
    assert!(engine.branch_states().all(|s| s == BranchState::Terminal));
}

#[test]
fn leaving_the_world_bounds_terminates_a_branch() {
    // A 30×30 world: the strand walks ~6 units per tick and must run out of
    // room long before it runs out of text.
    let world = WorldConfig {
        extent: 40.0,
        ..WorldConfig::default()
    };
    let text = "eine Meldung die niemals vollständig gezeichnet werden kann";
    let mut engine = GrowthEngine::new(&[seed(0, text)], single_branch_params(), world, 7);
    engine.run(10_000);

    assert!(engine.settled());
    assert!(engine.nodes().len() < text.chars().count());
    for node in engine.nodes() {
        assert!(engine.world().bounds().contains(node.position));
    }
}

#[test]
fn word_boundaries_can_fork_into_child_branches() {
    let params = GrowthParams {
        fork_chance: 1.0,
        max_branches_per_incident: 4,
        ..GrowthParams::default()
    };
    let text = "viele kurze Worte ergeben viele Gelegenheiten zum Verzweigen";
    let mut engine = engine_with(&[seed(0, text)], params);
    engine.run(10_000);

    assert!(engine.settled());
    assert!(engine.branch_states().count() > 1);
    assert!(engine.branch_states().count() <= 4);
    // Forking redistributes the text, it never duplicates or drops it.
    assert!(engine.nodes().len() <= text.chars().count());
}

#[test]
fn hit_test_returns_the_first_node_in_insertion_order() {
    let mut engine = engine_with(&[seed(3, "abc")], single_branch_params());
    engine.run(100);

    let first = engine.nodes()[0].position;
    let hit = engine.hit_test(first);
    assert_eq!(hit, Some(0));
    assert_eq!(engine.nodes()[0].incident, 3);

    // Far away from everything: a miss.
    assert_eq!(engine.hit_test(point(-10_000.0, -10_000.0)), None);
}

#[test]
fn reload_means_a_fresh_engine_with_no_stale_geometry() {
    let mut old = engine_with(&[seed(0, "alte Meldung")], single_branch_params());
    old.run(10_000);
    let stale = old.nodes()[0].position;

    let new = engine_with(&[], single_branch_params());
    assert_eq!(new.hit_test(stale), None);
}

#[test]
fn empty_seed_texts_produce_no_branches() {
    let engine = engine_with(&[seed(0, ""), seed(1, "")], single_branch_params());
    assert!(engine.settled());
    assert_eq!(engine.branch_states().count(), 0);
}
