//! Path search over a Graph: unweighted (BFS) and weighted (Dijkstra).

pub mod bfs;
pub mod dijkstra;

pub use bfs::bfs;
pub use dijkstra::{dijkstra, dijkstra_checked};
