use std::collections::HashSet;

use catworld::catalog::{breeds, facts, sounds};
use catworld::state::VolumeLevel;
use catworld::{Catalog, CatalogError, CatSession, Catalogs};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session_with_facts(facts: Vec<&str>, seed: u64) -> CatSession {
    let catalogs = Catalogs {
        breeds: breeds().unwrap(),
        facts: Catalog::new("facts", facts.into_iter().map(String::from).collect()).unwrap(),
        sounds: sounds().unwrap(),
    };
    CatSession::new(catalogs, VolumeLevel::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn breed_walkthrough_over_five_breeds() {
    let mut session = CatSession::with_seed(0).unwrap();
    assert_eq!(session.breed_position(), (0, 5));
    session.previous_breed();
    assert_eq!(session.breed_position().0, 4);
    session.next_breed();
    assert_eq!(session.breed_position().0, 0);
    session.next_breed();
    assert_eq!(session.breed_position().0, 1);
}

#[test]
fn full_lap_of_breeds_returns_home() {
    let mut session = CatSession::with_seed(0).unwrap();
    session.next_breed();
    session.next_breed();
    let start = session.current_breed().clone();
    for _ in 0..5 {
        session.next_breed();
    }
    assert_eq!(session.current_breed(), &start);
}

#[test]
fn generated_facts_come_from_the_catalog() {
    let mut session = CatSession::with_seed(2024).unwrap();
    assert!(session.current_fact().is_none());
    let catalog: HashSet<String> = facts().unwrap().iter().cloned().collect();
    for _ in 0..1000 {
        let fact = session.generate_fact().to_string();
        assert!(catalog.contains(&fact));
    }
}

#[test]
fn seeded_sessions_agree() {
    let mut left = CatSession::with_seed(11).unwrap();
    let mut right = CatSession::with_seed(11).unwrap();
    let left_facts: Vec<String> = (0..20).map(|_| left.generate_fact().to_string()).collect();
    let right_facts: Vec<String> = (0..20).map(|_| right.generate_fact().to_string()).collect();
    assert_eq!(left_facts, right_facts);
}

#[test]
fn two_fact_catalog_repeats_facts() {
    let mut session = session_with_facts(vec!["Cats nap.", "Cats purr."], 5);
    let draws: Vec<String> = (0..50).map(|_| session.generate_fact().to_string()).collect();
    assert!(draws.windows(2).any(|pair| pair[0] == pair[1]));
}

#[test]
fn likes_and_volume_through_the_session() {
    let mut session = CatSession::with_seed(0).unwrap();
    for _ in 0..12 {
        session.like();
    }
    assert_eq!(session.likes().count(), 12);
    assert_eq!(session.likes().progress(), 100);

    assert_eq!(session.set_volume(0).unwrap(), 0);
    assert!(session.set_volume(101).is_err());
    assert_eq!(session.volume(), 0);
    assert_eq!(session.play_current_sound().volume, 0);
}

#[test]
fn empty_catalog_fails_at_construction() {
    let err = Catalog::<String>::new("facts", vec![]).unwrap_err();
    assert_eq!(err, CatalogError::Empty("facts"));
}
