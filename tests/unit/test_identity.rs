use agentic_patterns::core::identity::{
    has_prefix, IdSource, RandomIdSource, SeededIdSource, SequentialIdSource, AGENT_PREFIX,
    PATTERN_PREFIX, SUFFIX_LEN,
};
use std::collections::HashSet;

fn assert_well_formed(id: &str, prefix: &str) {
    let (head, suffix) = id.rsplit_once('_').unwrap();
    assert_eq!(head, prefix);
    assert_eq!(suffix.len(), SUFFIX_LEN);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_random_ids_almost_never_collide_across_ten_thousand_draws() {
    // 32 random bits per suffix: about one collision per hundred runs of this
    // size is expected, several at once would mean a broken source.
    let ids = RandomIdSource;
    let minted: HashSet<String> = (0..10_000).map(|_| ids.make_id(AGENT_PREFIX)).collect();
    assert!(10_000 - minted.len() <= 3, "{} collisions", 10_000 - minted.len());
}

#[test]
fn test_random_ids_are_well_formed() {
    let ids = RandomIdSource;
    for _ in 0..100 {
        assert_well_formed(&ids.make_id(PATTERN_PREFIX), PATTERN_PREFIX);
    }
}

#[test]
fn test_seeded_sources_repeat_their_sequence() {
    let first = SeededIdSource::new(42);
    let second = SeededIdSource::new(42);
    let a: Vec<String> = (0..20).map(|_| first.make_id(AGENT_PREFIX)).collect();
    let b: Vec<String> = (0..20).map(|_| second.make_id(AGENT_PREFIX)).collect();
    assert_eq!(a, b);
    for id in &a {
        assert_well_formed(id, AGENT_PREFIX);
    }
}

#[test]
fn test_sequential_source_counts_in_hex() {
    let ids = SequentialIdSource::starting_at(9);
    assert_eq!(ids.make_id("task"), "task_00000009");
    assert_eq!(ids.make_id("task"), "task_0000000a");
}

#[test]
fn test_prefix_check_requires_separator() {
    assert!(has_prefix("agent_1a2b3c4d", AGENT_PREFIX));
    assert!(!has_prefix("agentx_1a2b3c4d", AGENT_PREFIX));
    assert!(!has_prefix("task_1a2b3c4d", AGENT_PREFIX));
}

#[test]
fn test_sources_are_shareable_across_threads() {
    let ids = std::sync::Arc::new(SeededIdSource::new(7));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ids = ids.clone();
            std::thread::spawn(move || {
                (0..250)
                    .map(|_| ids.make_id(AGENT_PREFIX))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let all: Vec<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(all.len(), 1000);
}
