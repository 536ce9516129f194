//! Campus buildings and walking paths, searched by building short name.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::graph::{FrozenGraph, Graph};
use crate::path::Path;
use crate::search::dijkstra_checked;
use crate::types::{GraphError, GraphResult, Point, Weight};

use super::read_tsv;

/// A named building and the map point of its entrance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusBuilding {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl CampusBuilding {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A straight walkway between two map points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusPath {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

/// The campus graph plus the building directory used to query it.
pub struct CampusMap {
    graph: FrozenGraph<Point, Weight>,
    buildings: BTreeMap<String, CampusBuilding>,
}

impl CampusMap {
    /// Load buildings and paths from two TSV files.
    pub fn load(buildings: &FsPath, paths: &FsPath) -> GraphResult<Self> {
        let map = Self::from_readers(
            BufReader::new(File::open(buildings)?),
            BufReader::new(File::open(paths)?),
        )?;
        log::info!(
            "loaded campus map: {} buildings, {} points, {} paths",
            map.buildings.len(),
            map.graph.node_count(),
            map.graph.edge_count()
        );
        Ok(map)
    }

    pub fn from_readers<B: Read, P: Read>(buildings: B, paths: P) -> GraphResult<Self> {
        Self::from_records(read_tsv(buildings)?, read_tsv(paths)?)
    }

    /// Every building point is a node; every path is a unique directed edge
    /// weighted by its distance.
    pub fn from_records(
        buildings: Vec<CampusBuilding>,
        paths: Vec<CampusPath>,
    ) -> GraphResult<Self> {
        let mut graph = Graph::new();
        let mut directory = BTreeMap::new();

        for building in buildings {
            graph.add_node(building.point())?;
            if let Some(previous) = directory.insert(building.short_name.clone(), building) {
                log::warn!("duplicate building short name {}", previous.short_name);
            }
        }
        for path in paths {
            let src = Point::new(path.x1, path.y1);
            let dst = Point::new(path.x2, path.y2);
            graph.add_node(src)?;
            graph.add_node(dst)?;
            graph.add_unique_edge(src, dst, Weight::new(path.distance)?)?;
        }

        Ok(Self {
            graph: graph.freeze(),
            buildings: directory,
        })
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Option<&str> {
        self.building(short_name).map(|b| b.long_name.as_str())
    }

    /// Short name -> long name for every building, sorted by short name.
    pub fn building_names(&self) -> BTreeMap<&str, &str> {
        self.buildings
            .iter()
            .map(|(short, b)| (short.as_str(), b.long_name.as_str()))
            .collect()
    }

    pub fn building(&self, short_name: &str) -> Option<&CampusBuilding> {
        self.buildings.get(short_name)
    }

    /// The read-only campus graph.
    pub fn graph(&self) -> &FrozenGraph<Point, Weight> {
        &self.graph
    }

    /// Shortest walking route between two buildings.
    ///
    /// An unreachable destination yields the zero-segment path at the start
    /// building.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> GraphResult<Path<Point>> {
        let src = self.locate(start)?;
        Ok(self
            .find_route(start, end)?
            .unwrap_or_else(|| Path::new(src)))
    }

    /// Shortest walking route between two buildings, or `None` when the
    /// destination cannot be reached. Buildings sharing a map point get a
    /// zero-segment route.
    pub fn find_route(&self, start: &str, end: &str) -> GraphResult<Option<Path<Point>>> {
        let src = self.locate(start)?;
        let dst = self.locate(end)?;
        dijkstra_checked(&*self.graph, &src, &dst)
    }

    fn locate(&self, short_name: &str) -> GraphResult<Point> {
        if short_name.is_empty() {
            return Err(GraphError::InvalidArgument(
                "building short name must not be empty".to_string(),
            ));
        }
        self.buildings
            .get(short_name)
            .map(CampusBuilding::point)
            .ok_or_else(|| GraphError::UnknownBuilding(short_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILDINGS: &str = "shortName\tlongName\tx\ty\n\
        AAA\tAlpha Hall\t0\t0\n\
        BBB\tBeta Hall\t10\t0\n";
    const PATHS: &str = "x1\ty1\tx2\ty2\tdistance\n\
        0\t0\t5\t5\t3\n\
        5\t5\t10\t0\t3\n\
        0\t0\t10\t0\t10\n";

    #[test]
    fn routes_through_cheaper_waypoint() {
        let map = CampusMap::from_readers(BUILDINGS.as_bytes(), PATHS.as_bytes()).unwrap();
        let path = map.find_shortest_path("AAA", "BBB").unwrap();
        assert_eq!(path.cost(), 6.0);
        assert_eq!(path.len(), 2);
        assert_eq!(map.long_name_for_short("BBB"), Some("Beta Hall"));
    }

    #[test]
    fn unknown_building_is_rejected() {
        let map = CampusMap::from_readers(BUILDINGS.as_bytes(), PATHS.as_bytes()).unwrap();
        assert!(matches!(
            map.find_shortest_path("AAA", "ZZZ"),
            Err(GraphError::UnknownBuilding(_))
        ));
        assert!(matches!(
            map.find_shortest_path("", "AAA"),
            Err(GraphError::InvalidArgument(_))
        ));
    }
}
