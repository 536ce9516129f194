//! Hero/book appearance datasets.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::GraphResult;

use super::read_tsv;

/// One appearance of a hero in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroAppearance {
    pub hero: String,
    pub book: String,
}

/// Load a hero graph from a TSV file with `hero` and `book` columns.
pub fn load_hero_graph(path: &FsPath) -> GraphResult<Graph<String, String>> {
    let file = File::open(path)?;
    let graph = hero_graph_from_reader(BufReader::new(file))?;
    log::info!(
        "loaded {} heroes and {} books from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Build a hero graph: every hero is a node, and every book is a shared
/// edge joining all heroes that appear in it.
pub fn hero_graph_from_reader<R: Read>(reader: R) -> GraphResult<Graph<String, String>> {
    let appearances: Vec<HeroAppearance> = read_tsv(reader)?;
    let mut graph = Graph::new();
    for HeroAppearance { hero, book } in appearances {
        if hero.is_empty() || book.is_empty() {
            log::warn!("skipping incomplete appearance: {:?} in {:?}", hero, book);
            continue;
        }
        graph.add_node(hero.clone())?;
        graph.add_single_source_edge(hero, book)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heroes_sharing_a_book_are_children() {
        let data = "hero\tbook\nA\tB1\nB\tB1\nC\tB2\n";
        let g = hero_graph_from_reader(data.as_bytes()).unwrap();
        assert_eq!(g.list_node_labels(), vec!["A", "B", "C"]);
        assert_eq!(g.list_children(&"A".to_string()), vec!["B(B1)"]);
        assert!(g.list_children(&"C".to_string()).is_empty());
    }
}
