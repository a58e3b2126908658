//! 边定义
//!
//! 无向边，两个端点按插入时的顺序记为 v0 和 v1

use crate::graph::vertex::VertexId;
use std::fmt;

/// 边 ID（边序列中的位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    v0: VertexId,
    v1: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(v0: VertexId, v1: VertexId) -> Self {
        Self { v0, v1 }
    }

    /// 第一个端点
    pub fn v0(&self) -> VertexId {
        self.v0
    }

    /// 第二个端点
    pub fn v1(&self) -> VertexId {
        self.v1
    }

    /// 获取另一端点；自环返回自身
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.v0 == v {
            self.v1
        } else {
            self.v0
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v0 == self.v1
    }

    /// 是否以 v 为端点
    pub fn touches(&self, v: VertexId) -> bool {
        self.v0 == v || self.v1 == v
    }
}
