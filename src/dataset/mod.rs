//! Tab-separated dataset ingestion.

pub mod campus;
pub mod heroes;

pub use campus::{CampusBuilding, CampusMap, CampusPath};
pub use heroes::{hero_graph_from_reader, load_hero_graph, HeroAppearance};

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::types::GraphResult;

/// Decode every record of a headed, tab-separated stream.
pub fn read_tsv<T: DeserializeOwned, R: Read>(reader: R) -> GraphResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}
