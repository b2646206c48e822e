pub mod brute_force;
pub mod collections;
pub mod dijkstra;
pub mod distance_table;

pub use dijkstra::{
    shortest_path_distance, shortest_paths, shortest_paths_with_budget, ShortestPathEngine,
};
pub use distance_table::{DistanceRow, DistanceTable, SearchStatistics};
