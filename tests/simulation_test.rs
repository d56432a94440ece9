//! Invasion engine tests
//!
//! Randomness comes from seeded RNGs so every run is reproducible.

use alien_invasion::config::RunConfig;
use alien_invasion::error::{ConfigError, SimError};
use alien_invasion::mapgen::GridMap;
use alien_invasion::simulation::{
    alien_names, evaluate_rules, next_positions, place_aliens, Alien, AlienPositions, City,
    Destruction, Direction, Neighbors, Simulation, WorldMap, ALIEN_NAMES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn simple_map() -> WorldMap {
    let mut map = WorldMap::new();
    map.insert("Talihina", Neighbors::new().with(Direction::South, "Pinson"));
    map.insert(
        "Pinson",
        Neighbors::new()
            .with(Direction::North, "Talihina")
            .with(Direction::East, "Fabens"),
    );
    map.insert("Fabens", Neighbors::new().with(Direction::West, "Pinson"));
    map.insert("Clifton", Neighbors::new());
    map
}

fn star_map() -> WorldMap {
    let mut map = WorldMap::new();
    map.insert(
        "Centercity",
        Neighbors::new()
            .with(Direction::North, "Northcity")
            .with(Direction::South, "Southcity")
            .with(Direction::East, "Eastcity")
            .with(Direction::West, "Westcity"),
    );
    map.insert("Northcity", Neighbors::new().with(Direction::South, "Centercity"));
    map.insert("Southcity", Neighbors::new().with(Direction::North, "Centercity"));
    map.insert("Eastcity", Neighbors::new().with(Direction::West, "Centercity"));
    map.insert("Westcity", Neighbors::new().with(Direction::East, "Centercity"));
    map
}

fn positions(entries: &[(&str, &str)]) -> AlienPositions {
    entries
        .iter()
        .map(|&(alien, city)| (Alien::from(alien), City::from(city)))
        .collect()
}

fn position_of<'a>(simulation: &'a Simulation, alien: &str) -> Option<&'a City> {
    simulation.alien_positions().get(&Alien::from(alien))
}

#[test]
fn test_aliens_placed_on_map() {
    let map = simple_map();
    let simulation = Simulation::new_with_seed(10, 3, &map, 7).unwrap();

    assert_eq!(simulation.alien_positions().len(), 3);
    for city in simulation.alien_positions().values() {
        assert!(map.contains(city));
    }
}

#[test]
fn test_placement_uses_whole_map() {
    let map = star_map();
    let mut rng = StdRng::seed_from_u64(11);

    for count in [1, 5, 40, 75, 200] {
        let positions = place_aliens(count, &map, &mut rng).unwrap();
        assert_eq!(positions.len(), count);
        assert!(positions.values().all(|city| map.contains(city)));
    }
}

#[test]
fn test_empty_map_rejected() {
    let result = Simulation::new(10, 3, &WorldMap::new());
    assert!(matches!(result, Err(SimError::Config(ConfigError::EmptyMap))));

    let mut rng = StdRng::seed_from_u64(1);
    let result = place_aliens(3, &WorldMap::new(), &mut rng);
    assert!(matches!(result, Err(SimError::Config(ConfigError::EmptyMap))));
}

#[test]
fn test_alien_names_from_pool_in_order() {
    let names = alien_names(3).unwrap();
    let expected: Vec<Alien> = ALIEN_NAMES[..3].iter().map(|&n| Alien::from(n)).collect();
    assert_eq!(names, expected);

    let names = alien_names(75).unwrap();
    assert_eq!(names.len(), 75);
    let unique: BTreeSet<&Alien> = names.iter().collect();
    assert_eq!(unique.len(), 75);
}

#[test]
fn test_numbered_names_if_more_than_75_aliens() {
    let simulation = Simulation::new_with_seed(100, 76, &simple_map(), 3).unwrap();

    assert_eq!(simulation.alien_positions().len(), 76);
    assert!(simulation.alien_positions().contains_key(&Alien::from("Alien 1")));
    assert!(simulation.alien_positions().contains_key(&Alien::from("Alien 76")));
}

#[test]
fn test_aliens_and_city_destroyed() {
    let mut simulation = Simulation::with_positions(
        10,
        &star_map(),
        positions(&[("Alien 1", "Centercity"), ("Alien 2", "Centercity")]),
        1,
    )
    .unwrap();

    simulation.step();

    let mut expected = WorldMap::new();
    for city in ["Northcity", "Southcity", "Eastcity", "Westcity"] {
        expected.insert(city, Neighbors::new());
    }

    assert_eq!(simulation.iteration(), 1);
    assert_eq!(simulation.world_map(), &expected);
    assert!(simulation.alien_positions().is_empty());
    assert_eq!(
        simulation.destroyed(),
        &[Destruction {
            city: City::from("Centercity"),
            aliens: vec![Alien::from("Alien 1"), Alien::from("Alien 2")],
        }]
    );
    assert!(simulation.should_stop());
}

#[test]
fn test_alien_takes_an_existing_road() {
    let mut simulation =
        Simulation::with_positions(10, &simple_map(), positions(&[("Alien 1", "Talihina")]), 5)
            .unwrap();

    simulation.step();

    assert_eq!(simulation.iteration(), 1);
    assert_eq!(position_of(&simulation, "Alien 1"), Some(&City::from("Pinson")));
}

#[test]
fn test_alien_never_visits_an_isolated_city() {
    let map = simple_map();
    let mut simulation =
        Simulation::with_positions(100, &map, positions(&[("Alien 1", "Pinson")]), 9).unwrap();
    let reachable = map.reachable_from(&City::from("Pinson"));

    for _ in 0..100 {
        simulation.step();
        let city = position_of(&simulation, "Alien 1").unwrap();
        assert_ne!(city, &City::from("Clifton"));
        assert!(reachable.contains(city));
    }

    assert_eq!(simulation.iteration(), 100);
}

#[test]
fn test_alien_does_not_move_when_trapped() {
    let mut simulation =
        Simulation::with_positions(100, &simple_map(), positions(&[("Alien 1", "Clifton")]), 2)
            .unwrap();

    for _ in 0..10 {
        simulation.step();
        assert_eq!(position_of(&simulation, "Alien 1"), Some(&City::from("Clifton")));
    }
}

#[test]
fn test_alien_travels_in_any_valid_direction() {
    let mut simulation =
        Simulation::with_positions(100, &star_map(), positions(&[("Alien 1", "Centercity")]), 4)
            .unwrap();

    let mut visited = BTreeSet::new();
    for _ in 0..100 {
        simulation.step();
        visited.insert(position_of(&simulation, "Alien 1").unwrap().clone());
    }

    assert_eq!(visited.len(), 5);
}

#[test]
fn test_simulation_runs_until_iteration_limit() {
    let map = simple_map();
    let mut simulation = Simulation::new_with_seed(100, 1, &map, 42).unwrap();

    let result = simulation.run();

    assert_eq!(result, map);
    assert_eq!(simulation.iteration(), 100);
    assert!(simulation.should_stop());
    assert!(simulation.destroyed().is_empty());
}

#[test]
fn test_zero_iteration_limit_changes_nothing() {
    let map = star_map();
    let mut simulation = Simulation::with_positions(
        0,
        &map,
        positions(&[("Alien 1", "Centercity"), ("Alien 2", "Centercity")]),
        1,
    )
    .unwrap();

    assert!(simulation.should_stop());
    assert_eq!(simulation.run(), map);
    assert_eq!(simulation.alien_positions().len(), 2);
}

#[test]
fn test_caller_map_is_not_mutated() {
    let map = star_map();
    let mut simulation = Simulation::with_positions(
        10,
        &map,
        positions(&[("Alien 1", "Centercity"), ("Alien 2", "Centercity")]),
        1,
    )
    .unwrap();

    simulation.run();

    assert_eq!(map, star_map());
    assert_eq!(simulation.world_map().len(), 4);
}

#[test]
fn test_destruction_does_not_cascade() {
    let mut map = simple_map();
    let mut aliens = positions(&[
        ("A", "Pinson"),
        ("B", "Pinson"),
        ("C", "Pinson"),
        ("D", "Fabens"),
    ]);

    let destructions = evaluate_rules(&mut aliens, &mut map);

    assert_eq!(destructions.len(), 1);
    assert_eq!(destructions[0].city, City::from("Pinson"));
    assert_eq!(destructions[0].aliens.len(), 3);
    assert_eq!(aliens, positions(&[("D", "Fabens")]));
    assert!(!map.contains(&City::from("Pinson")));
    assert!(map.neighbors(&City::from("Talihina")).is_isolated());
    assert!(map.neighbors(&City::from("Fabens")).is_isolated());
}

#[test]
fn test_several_cities_destroyed_in_one_evaluation() {
    let mut map = simple_map();
    let mut aliens = positions(&[("A", "Pinson"), ("B", "Pinson"), ("C", "Fabens"), ("D", "Fabens")]);

    let destructions = evaluate_rules(&mut aliens, &mut map);

    let cities: Vec<&City> = destructions.iter().map(|d| &d.city).collect();
    assert_eq!(cities, vec![&City::from("Fabens"), &City::from("Pinson")]);
    assert!(aliens.is_empty());
    assert_eq!(map.len(), 2);
    assert!(map.iter().all(|(_, neighbors)| neighbors.is_isolated()));
}

#[test]
fn test_aliens_placed_together_fight_before_moving() {
    let mut simulation = Simulation::with_positions(
        1,
        &simple_map(),
        positions(&[("A", "Clifton"), ("B", "Clifton"), ("C", "Talihina")]),
        8,
    )
    .unwrap();

    simulation.step();

    assert!(!simulation.world_map().contains(&City::from("Clifton")));
    assert_eq!(position_of(&simulation, "C"), Some(&City::from("Pinson")));
    assert_eq!(simulation.destroyed().len(), 1);
}

#[test]
fn test_movement_is_simultaneous() {
    // Two aliens swapping places pass each other without meeting
    let mut map = WorldMap::new();
    map.insert("Left", Neighbors::new().with(Direction::East, "Right"));
    map.insert("Right", Neighbors::new().with(Direction::West, "Left"));
    let current = positions(&[("A", "Left"), ("B", "Right")]);

    let mut rng = StdRng::seed_from_u64(0);
    let next = next_positions(&current, &map, &mut rng);

    assert_eq!(next, positions(&[("A", "Right"), ("B", "Left")]));
}

#[test]
fn test_alien_on_dangling_road_is_trapped() {
    let mut map = WorldMap::new();
    map.insert("Pinson", Neighbors::new().with(Direction::East, "Nowhere"));
    let mut simulation =
        Simulation::with_positions(5, &map, positions(&[("A", "Pinson")]), 3).unwrap();

    simulation.run();

    assert_eq!(position_of(&simulation, "A"), Some(&City::from("Nowhere")));
    assert_eq!(simulation.iteration(), 5);
}

#[test]
fn test_map_and_aliens_only_shrink() {
    let mut rng = StdRng::seed_from_u64(21);
    let grid = GridMap::generate(6, 6, 24, &mut rng).unwrap();
    let mut simulation = Simulation::new_with_seed(200, 30, grid.world_map(), 21).unwrap();

    let mut cities = simulation.world_map().len();
    let mut aliens = simulation.alien_positions().len();
    while !simulation.should_stop() {
        simulation.step();
        assert!(simulation.world_map().len() <= cities);
        assert!(simulation.alien_positions().len() <= aliens);
        cities = simulation.world_map().len();
        aliens = simulation.alien_positions().len();
    }
}

#[test]
fn test_run_terminates_within_limit() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = GridMap::generate(5, 5, 20, &mut rng).unwrap();
        let config = RunConfig {
            iteration_limit: 50,
            alien_count: 10,
            seed: Some(seed),
        };
        let mut simulation = Simulation::from_config(&config, grid.world_map()).unwrap();

        let result = simulation.run();

        assert!(simulation.iteration() <= 50);
        assert!(simulation.should_stop());
        assert_eq!(&result, simulation.world_map());
        for destruction in simulation.destroyed() {
            assert!(!result.contains(&destruction.city));
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(5);
    let grid = GridMap::generate(5, 5, 20, &mut rng).unwrap();

    let mut first = Simulation::new_with_seed(100, 12, grid.world_map(), 99).unwrap();
    let mut second = Simulation::new_with_seed(100, 12, grid.world_map(), 99).unwrap();

    assert_eq!(first.run(), second.run());
    assert_eq!(first.destroyed(), second.destroyed());
    assert_eq!(first.alien_positions(), second.alien_positions());
}

#[test]
fn test_destruction_report() {
    let report = |aliens: &[&str]| {
        Destruction {
            city: City::from("Pinson"),
            aliens: aliens.iter().map(|&a| Alien::from(a)).collect(),
        }
        .to_string()
    };

    assert_eq!(report(&["Zorg"]), "Pinson has been destroyed by Zorg!");
    assert_eq!(report(&["Zorg", "Xylox"]), "Pinson has been destroyed by Zorg and Xylox!");
    assert_eq!(
        report(&["Zorg", "Xylox", "Quazar"]),
        "Pinson has been destroyed by Zorg, Xylox and Quazar!"
    );
}
