use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use romania_paths::{
    graphs::{
        graph_functions::has_repeated_vertex, path::SearchRequest, road_map::RoadMap,
        romania::load_graph,
    },
    heuristics::{straight_line::StraightLineDistance, Heuristic},
    search::{
        config::{AnnealingOptions, CoolingSchedule},
        search_request,
        simulated_annealing::simulated_annealing,
        Strategy as SearchStrategy,
    },
};

fn city_names() -> Vec<String> {
    load_graph().names().to_vec()
}

fn city() -> impl Strategy<Value = String> {
    proptest::sample::select(city_names())
}

fn schedule() -> impl Strategy<Value = CoolingSchedule> {
    prop_oneof![
        Just(CoolingSchedule::Inverse),
        (0.5f64..1.0, 0.0f64..1.0)
            .prop_map(|(alpha, floor)| CoolingSchedule::Geometric { alpha, floor }),
        (1.0f64..500.0, 1usize..2000)
            .prop_map(|(initial, steps)| CoolingSchedule::Linear { initial, steps }),
    ]
}

fn lookup_pair(map: &RoadMap, source: &str, target: &str) -> (u32, u32) {
    (map.vertex(source).unwrap(), map.vertex(target).unwrap())
}

proptest! {
    #[test]
    fn heuristic_is_symmetric(a in city(), b in city()) {
        let map = load_graph();
        let forward = map.heuristic(&a, &b).unwrap();
        let backward = map.heuristic(&b, &a).unwrap();

        prop_assert_eq!(forward, backward);
        prop_assert!(forward >= 0.0);
        prop_assert_eq!(forward == 0.0, a == b);
        prop_assert_eq!(map.heuristic(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn annealing_is_reproducible_and_acyclic(
        a in city(),
        b in city(),
        seed in any::<u64>(),
        schedule in schedule(),
        max_steps in 1usize..3000,
    ) {
        let map = load_graph();
        let heuristic = StraightLineDistance::new(&map);
        let (source, target) = lookup_pair(&map, &a, &b);

        let run = || simulated_annealing(
            &map,
            &heuristic,
            source,
            target,
            |step| schedule.temperature(step),
            max_steps,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        let first = run();
        let second = run();

        prop_assert_eq!(&first, &second);
        prop_assert!(!has_repeated_vertex(&first.path));
        prop_assert!(first.path.ends_at(target));
        prop_assert_eq!(map.path_weight(&first.path.vertices), Some(first.path.weight));
        prop_assert!(first.accepted_moves <= first.steps);
    }

    #[test]
    fn hot_annealing_never_beats_astar(a in city(), b in city(), seed in any::<u64>()) {
        let map = load_graph();
        let (source, target) = lookup_pair(&map, &a, &b);
        let request = SearchRequest::new(source, target);
        let options = AnnealingOptions::default()
            .with_seed(seed)
            .with_schedule(CoolingSchedule::Geometric { alpha: 1.0, floor: 1.0e6 });

        let annealed = search_request(&map, SearchStrategy::SimulatedAnnealing, &request, &options).unwrap();
        let optimal = search_request(&map, SearchStrategy::AStar, &request, &options).unwrap();

        prop_assert!(optimal.path.weight <= annealed.path.weight);
    }

    #[test]
    fn hill_climbing_descends(a in city(), b in city()) {
        let map = load_graph();
        let heuristic = StraightLineDistance::new(&map);
        let (source, target) = lookup_pair(&map, &a, &b);
        let request = SearchRequest::new(source, target);

        let outcome = search_request(&map, SearchStrategy::HillClimbing, &request, &AnnealingOptions::default()).unwrap();
        let estimates: Vec<f64> = outcome
            .path
            .vertices
            .iter()
            .map(|&vertex| heuristic.lower_bound(vertex, target))
            .collect();

        prop_assert!(estimates.windows(2).all(|pair| pair[1] < pair[0]));
        prop_assert!(!has_repeated_vertex(&outcome.path));
    }
}
