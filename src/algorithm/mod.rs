//! 图算法模块
//!
//! 广度优先遍历和无权最短路径

mod path_finder;
mod visited;

pub use path_finder::{PathFinder, PathResult};
pub use visited::Visited;
