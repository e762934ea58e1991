use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path as FilePath,
};

use ahash::{HashMap, HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use super::{
    extend_weight, vec_vec_graph::VecVecGraph, Coordinate, Graph, VertexId, Weight, WeightedEdge,
};
use crate::error::SearchError;

/// Named, undirected road network with a straight-line position per city.
///
/// Cities are interned to dense `VertexId`s in insertion order. Every road
/// is stored in both directions, so `weight(a, b) == weight(b, a)`.
#[derive(Clone, Debug)]
pub struct RoadMap {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    coordinates: Vec<Coordinate>,
    graph: VecVecGraph,
}

impl RoadMap {
    pub fn builder() -> RoadMapBuilder {
        RoadMapBuilder::default()
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.names.len() as u32
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + Clone {
        0..self.number_of_vertices()
    }

    pub fn vertex(&self, name: &str) -> Result<VertexId, SearchError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex as usize]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn coordinate(&self, vertex: VertexId) -> Coordinate {
        self.coordinates[vertex as usize]
    }

    /// Neighbours of `vertex` in ascending id order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.graph.edges(vertex).map(|edge| (edge.head, edge.weight))
    }

    pub fn weight(&self, tail: VertexId, head: VertexId) -> Option<Weight> {
        self.graph.get_weight(tail, head)
    }

    pub fn graph(&self) -> &VecVecGraph {
        &self.graph
    }

    /// Sum of road lengths along `vertices`, `None` if two consecutive
    /// cities are not connected or the sum does not fit below `Weight::MAX`.
    pub fn path_weight(&self, vertices: &[VertexId]) -> Option<Weight> {
        vertices.windows(2).try_fold(0, |weight, pair| {
            extend_weight(weight, self.weight(pair[0], pair[1])?)
        })
    }

    /// Straight-line distance between two named cities.
    pub fn heuristic(&self, city: &str, goal: &str) -> Result<f64, SearchError> {
        let city = self.vertex(city)?;
        let goal = self.vertex(goal)?;
        Ok(self.coordinate(city).distance(&self.coordinate(goal)))
    }

    pub fn roads(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(|tail| self.graph.edges(tail))
            .filter(|edge| edge.tail < edge.head)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<RoadMap, SearchError> {
        let file: RoadMapFile = serde_json::from_reader(reader)?;
        file.into_road_map()
    }

    pub fn from_json_file(path: &FilePath) -> Result<RoadMap, SearchError> {
        let reader = BufReader::new(File::open(path)?);
        RoadMap::from_json_reader(reader)
    }

    pub fn to_file(&self) -> RoadMapFile {
        RoadMapFile {
            cities: self
                .vertices()
                .map(|vertex| CityRecord {
                    name: self.name(vertex).to_string(),
                    x: self.coordinate(vertex).x,
                    y: self.coordinate(vertex).y,
                })
                .collect(),
            roads: self
                .roads()
                .map(|edge| RoadRecord {
                    from: self.name(edge.tail).to_string(),
                    to: self.name(edge.head).to_string(),
                    distance: edge.weight,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct RoadMapBuilder {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    coordinates: Vec<Coordinate>,
    roads: Vec<(String, String, Weight)>,
}

impl RoadMapBuilder {
    pub fn city(mut self, name: &str, x: f64, y: f64) -> Self {
        self.add_city(name, x, y);
        self
    }

    pub fn road(mut self, from: &str, to: &str, distance: Weight) -> Self {
        self.add_road(from, to, distance);
        self
    }

    pub fn add_city(&mut self, name: &str, x: f64, y: f64) {
        let vertex = self.names.len() as VertexId;
        // Duplicates are detected in `build`.
        self.index.entry(name.to_string()).or_insert(vertex);
        self.names.push(name.to_string());
        self.coordinates.push(Coordinate::new(x, y));
    }

    pub fn add_road(&mut self, from: &str, to: &str, distance: Weight) {
        self.roads.push((from.to_string(), to.to_string(), distance));
    }

    pub fn build(self) -> Result<RoadMap, SearchError> {
        if self.index.len() != self.names.len() {
            let mut seen = HashSet::new();
            for name in self.names.iter() {
                if !seen.insert(name.as_str()) {
                    return Err(SearchError::InvalidMap(format!("duplicate city {}", name)));
                }
            }
        }

        // The straight-line estimate is zero only at the goal.
        let mut positions = HashSet::new();
        for (name, coordinate) in self.names.iter().zip(self.coordinates.iter()) {
            if !coordinate.x.is_finite() || !coordinate.y.is_finite() {
                return Err(SearchError::InvalidMap(format!(
                    "city {} has a non-finite position",
                    name
                )));
            }
            // Adding zero folds -0.0 into 0.0.
            let key = ((coordinate.x + 0.0).to_bits(), (coordinate.y + 0.0).to_bits());
            if !positions.insert(key) {
                return Err(SearchError::InvalidMap(format!(
                    "city {} shares its position with another city",
                    name
                )));
            }
        }

        let lookup = |name: &str| {
            self.index
                .get(name)
                .copied()
                .ok_or_else(|| SearchError::InvalidMap(format!("road to unknown city {}", name)))
        };

        let mut edges = Vec::with_capacity(2 * self.roads.len());
        for (from, to, distance) in self.roads.iter() {
            if *distance == Weight::MAX {
                return Err(SearchError::InvalidMap(format!(
                    "road {} - {} is {} long, the largest allowed is {}",
                    from,
                    to,
                    distance,
                    Weight::MAX - 1
                )));
            }
            let edge = WeightedEdge::new(lookup(from.as_str())?, lookup(to.as_str())?, *distance)
                .ok_or_else(|| SearchError::InvalidMap(format!("self loop at {}", from)))?;
            edges.push(edge.reversed());
            edges.push(edge);
        }

        let mut graph = VecVecGraph::with_vertices(self.names.len() as u32);
        edges.iter().for_each(|edge| graph.insert_lightest(edge));

        Ok(RoadMap {
            names: self.names,
            index: self.index,
            coordinates: self.coordinates,
            graph,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub distance: Weight,
}

/// On-disk layout of a road map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoadMapFile {
    pub cities: Vec<CityRecord>,
    pub roads: Vec<RoadRecord>,
}

impl RoadMapFile {
    pub fn into_road_map(self) -> Result<RoadMap, SearchError> {
        let mut builder = RoadMap::builder();
        for city in self.cities.iter() {
            builder.add_city(&city.name, city.x, city.y);
        }
        for road in self.roads.iter() {
            builder.add_road(&road.from, &road.to, road.distance);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RoadMap {
        RoadMap::builder()
            .city("A", 0.0, 0.0)
            .city("B", 3.0, 4.0)
            .city("C", 6.0, 0.0)
            .road("A", "B", 5)
            .road("B", "C", 6)
            .build()
            .unwrap()
    }

    #[test]
    fn roads_are_symmetric() {
        let map = triangle();
        let a = map.vertex("A").unwrap();
        let b = map.vertex("B").unwrap();

        assert_eq!(map.weight(a, b), Some(5));
        assert_eq!(map.weight(b, a), Some(5));
        assert_eq!(map.roads().count(), 2);
    }

    #[test]
    fn path_weight_requires_edges() {
        let map = triangle();
        let [a, b, c] = ["A", "B", "C"].map(|name| map.vertex(name).unwrap());

        assert_eq!(map.path_weight(&[a, b, c]), Some(11));
        assert_eq!(map.path_weight(&[a, c]), None);
        assert_eq!(map.path_weight(&[a]), Some(0));
        assert_eq!(map.path_weight(&[]), Some(0));
    }

    #[test]
    fn unknown_city_is_reported() {
        let map = triangle();
        assert!(matches!(map.vertex("Z"), Err(SearchError::UnknownNode(name)) if name == "Z"));
        assert!(map.heuristic("A", "Z").is_err());
        assert_eq!(map.heuristic("A", "B").unwrap(), 5.0);
    }

    #[test]
    fn rejects_invalid_maps() {
        let duplicate = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .city("A", 1.0, 1.0)
            .build();
        assert!(matches!(duplicate, Err(SearchError::InvalidMap(_))));

        let dangling = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .road("A", "B", 1)
            .build();
        assert!(matches!(dangling, Err(SearchError::InvalidMap(_))));

        let self_loop = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .road("A", "A", 1)
            .build();
        assert!(matches!(self_loop, Err(SearchError::InvalidMap(_))));

        let same_position = RoadMap::builder()
            .city("A", 1.0, 2.0)
            .city("B", 1.0, 2.0)
            .build();
        assert!(matches!(same_position, Err(SearchError::InvalidMap(_))));

        let signed_zero = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .city("B", -0.0, 0.0)
            .build();
        assert!(matches!(signed_zero, Err(SearchError::InvalidMap(_))));

        let nowhere = RoadMap::builder().city("A", f64::NAN, 0.0).build();
        assert!(matches!(nowhere, Err(SearchError::InvalidMap(_))));
    }

    #[test]
    fn rejects_road_of_sentinel_length() {
        let json = r#"{
            "cities": [{ "name": "a", "x": 0.0, "y": 0.0 }, { "name": "b", "x": 1.0, "y": 0.0 }],
            "roads": [{ "from": "a", "to": "b", "distance": 4294967295 }]
        }"#;

        assert!(matches!(
            RoadMap::from_json_reader(json.as_bytes()),
            Err(SearchError::InvalidMap(_))
        ));
    }

    #[test]
    fn path_weight_overflow_is_none() {
        let map = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .city("B", 1.0, 0.0)
            .city("C", 2.0, 0.0)
            .road("A", "B", 3_000_000_000)
            .road("B", "C", 3_000_000_000)
            .build()
            .unwrap();
        let [a, b, c] = ["A", "B", "C"].map(|name| map.vertex(name).unwrap());

        assert_eq!(map.path_weight(&[a, b]), Some(3_000_000_000));
        assert_eq!(map.path_weight(&[a, b, c]), None);
    }

    #[test]
    fn isolated_cities_have_no_neighbors() {
        let map = RoadMap::builder()
            .city("A", 0.0, 0.0)
            .city("B", 1.0, 0.0)
            .city("C", 2.0, 0.0)
            .road("A", "B", 1)
            .build()
            .unwrap();

        let c = map.vertex("C").unwrap();
        assert_eq!(map.neighbors(c).count(), 0);
        assert_eq!(map.graph().number_of_vertices(), 3);
    }

    #[test]
    fn json_round_trip_keeps_roads() {
        let map = triangle();
        let json = serde_json::to_string(&map.to_file()).unwrap();
        let reread = RoadMap::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(reread.names(), map.names());
        assert_eq!(
            reread.weight(reread.vertex("B").unwrap(), reread.vertex("C").unwrap()),
            Some(6)
        );
    }
}
