//! 顶点定义
//!
//! 顶点只保存关联边列表和遍历标记，标签记录在标签索引中

use crate::graph::edge::EdgeId;
use smallvec::SmallVec;
use std::fmt;

/// 顶点 ID（顶点序列中的位置，分配后不再改变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 关联边列表，多数顶点度数很小，直接内联存储
pub type IncidentEdges = SmallVec<[EdgeId; 4]>;

/// 顶点
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// 关联边（按插入顺序）
    edges: IncidentEdges,
    /// 遍历标记
    explored: bool,
}

impl Vertex {
    /// 创建新顶点（无关联边，未访问）
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取关联边
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// 度数（自环计两次）
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    pub(crate) fn push_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn set_explored(&mut self, explored: bool) {
        self.explored = explored;
    }
}
