use super::{road_map::RoadMap, Weight};

// Straight-line positions from the AIMA Romania figure.
const CITIES: [(&str, f64, f64); 20] = [
    ("Arad", 91.0, 492.0),
    ("Bucharest", 400.0, 327.0),
    ("Craiova", 253.0, 288.0),
    ("Drobeta", 165.0, 299.0),
    ("Eforie", 562.0, 293.0),
    ("Fagaras", 305.0, 449.0),
    ("Giurgiu", 375.0, 270.0),
    ("Hirsova", 534.0, 350.0),
    ("Iasi", 473.0, 506.0),
    ("Lugoj", 165.0, 379.0),
    ("Mehadia", 168.0, 339.0),
    ("Neamt", 406.0, 537.0),
    ("Oradea", 131.0, 571.0),
    ("Pitesti", 320.0, 368.0),
    ("Rimnicu", 233.0, 410.0),
    ("Sibiu", 207.0, 457.0),
    ("Timisoara", 94.0, 410.0),
    ("Urziceni", 456.0, 350.0),
    ("Vaslui", 509.0, 444.0),
    ("Zerind", 108.0, 531.0),
];

// Driving distances in km, each road listed once.
const ROADS: [(&str, &str, Weight); 23] = [
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Bucharest", "Urziceni", 85),
    ("Bucharest", "Pitesti", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Fagaras", 211),
    ("Craiova", "Pitesti", 138),
    ("Craiova", "Rimnicu", 146),
    ("Craiova", "Drobeta", 120),
    ("Drobeta", "Mehadia", 75),
    ("Eforie", "Hirsova", 86),
    ("Fagaras", "Sibiu", 99),
    ("Hirsova", "Urziceni", 98),
    ("Iasi", "Vaslui", 92),
    ("Iasi", "Neamt", 87),
    ("Lugoj", "Timisoara", 111),
    ("Lugoj", "Mehadia", 70),
    ("Oradea", "Zerind", 71),
    ("Oradea", "Sibiu", 151),
    ("Pitesti", "Rimnicu", 97),
    ("Rimnicu", "Sibiu", 80),
    ("Urziceni", "Vaslui", 142),
];

/// The 20 city Romania road map.
pub fn load_graph() -> RoadMap {
    let mut builder = RoadMap::builder();
    for (name, x, y) in CITIES {
        builder.add_city(name, x, y);
    }
    for (from, to, distance) in ROADS {
        builder.add_road(from, to, distance);
    }
    builder
        .build()
        .expect("built-in Romania dataset is consistent")
}
