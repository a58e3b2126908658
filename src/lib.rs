//! AdjGraph - 内存标签无向图
//!
//! 以邻接表保存带标签的无向图，支持：
//! - 幂等的批量顶点插入和整批校验的边插入
//! - 广度优先遍历（可达性标记）
//! - 无权单源最短路径（跳数）

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult, Visited};
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, LabelIndex, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
