use romania_paths::{
    graphs::{
        graph_functions::{all_requests, has_repeated_vertex, validate_path},
        romania::load_graph,
    },
    search::{config::AnnealingOptions, search, search_request, Strategy},
    SearchError,
};

#[test]
fn astar_arad_to_bucharest() {
    let map = load_graph();
    let outcome = search(
        &map,
        Strategy::AStar,
        "Arad",
        "Bucharest",
        &AnnealingOptions::default(),
    )
    .unwrap();

    assert_eq!(
        outcome.path.names(&map),
        vec!["Arad", "Sibiu", "Rimnicu", "Pitesti", "Bucharest"]
    );
    assert_eq!(outcome.path.weight, 418);
    assert_eq!(
        outcome.path.display(&map),
        "Arad → Sibiu → Rimnicu → Pitesti → Bucharest"
    );
}

#[test]
fn greedy_arad_to_bucharest() {
    let map = load_graph();
    let outcome = search(
        &map,
        Strategy::Greedy,
        "Arad",
        "Bucharest",
        &AnnealingOptions::default(),
    )
    .unwrap();

    let names = outcome.path.names(&map);
    assert_eq!(names.first(), Some(&"Arad"));
    assert_eq!(names.last(), Some(&"Bucharest"));
    assert_eq!(
        map.path_weight(&outcome.path.vertices),
        Some(outcome.path.weight)
    );
}

#[test]
fn start_equals_goal_for_every_strategy() {
    let map = load_graph();
    let options = AnnealingOptions::default();

    for strategy in Strategy::ALL {
        let outcome = search(&map, strategy, "Craiova", "Craiova", &options).unwrap();
        assert_eq!(outcome.path.names(&map), vec!["Craiova"], "{}", strategy);
        assert_eq!(outcome.path.weight, 0, "{}", strategy);
        assert!(!outcome.fallback_used);
    }
}

#[test]
fn unknown_city() {
    let map = load_graph();
    let result = search(
        &map,
        Strategy::Greedy,
        "Arad",
        "Budapest",
        &AnnealingOptions::default(),
    );

    assert!(matches!(result, Err(SearchError::UnknownNode(city)) if city == "Budapest"));
}

#[test]
fn every_path_is_valid_and_astar_is_cheapest() {
    let map = load_graph();
    let options = AnnealingOptions::default();

    for request in all_requests(&map) {
        let outcomes: Vec<_> = Strategy::ALL
            .iter()
            .map(|&strategy| search_request(&map, strategy, &request, &options).unwrap())
            .collect();
        let optimal = outcomes[1].path.weight;
        assert!(outcomes[1].path.ends_at(request.target));

        for outcome in outcomes.iter() {
            assert_eq!(
                validate_path(&map, &request, &outcome.path),
                Ok(()),
                "{} from {} to {}",
                outcome.strategy,
                map.name(request.source),
                map.name(request.target)
            );
            if outcome.path.ends_at(request.target) {
                assert!(optimal <= outcome.path.weight);
            }
        }

        // The map is connected, so both complete strategies get there.
        assert!(outcomes[0].path.ends_at(request.target));
        assert!(outcomes[3].path.ends_at(request.target));
        assert!(!has_repeated_vertex(&outcomes[2].path));
        assert!(!has_repeated_vertex(&outcomes[3].path));
    }
}

#[test]
fn hill_climbing_may_stop_short() {
    let map = load_graph();
    let outcome = search(
        &map,
        Strategy::HillClimbing,
        "Timisoara",
        "Bucharest",
        &AnnealingOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.path.names(&map), vec!["Timisoara", "Lugoj", "Mehadia"]);
    assert_eq!(outcome.path.weight, 181);
    assert!(!outcome.path.ends_at(map.vertex("Bucharest").unwrap()));
}

#[test]
fn annealing_is_reproducible() {
    let map = load_graph();
    let options = AnnealingOptions::default().with_seed(1234);

    let first = search(&map, Strategy::SimulatedAnnealing, "Oradea", "Eforie", &options).unwrap();
    let second = search(&map, Strategy::SimulatedAnnealing, "Oradea", "Eforie", &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn default_annealing_falls_back_on_long_routes() {
    let map = load_graph();
    let outcome = search(
        &map,
        Strategy::SimulatedAnnealing,
        "Arad",
        "Bucharest",
        &AnnealingOptions::default(),
    )
    .unwrap();
    let greedy = search(
        &map,
        Strategy::Greedy,
        "Arad",
        "Bucharest",
        &AnnealingOptions::default(),
    )
    .unwrap();

    assert!(outcome.fallback_used);
    assert_eq!(outcome.path, greedy.path);
}
