//! 标签索引
//!
//! 标签到顶点 ID 的映射。映射按插入顺序保存，标签在映射中的位置
//! 就是其顶点序号，因此反向查找（ID 到标签）直接复用同一结构。

use crate::graph::vertex::VertexId;
use indexmap::IndexMap;

/// 标签索引
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    /// 标签到顶点 ID 的映射（位置 i 对应 VertexId(i)）
    label_to_id: IndexMap<String, VertexId>,
}

impl LabelIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            label_to_id: IndexMap::with_capacity(capacity),
        }
    }

    /// 插入标签，新标签获得下一个顶点序号。
    ///
    /// 标签已存在时不做任何修改，返回 `None`。
    pub fn insert(&mut self, label: &str) -> Option<VertexId> {
        if self.label_to_id.contains_key(label) {
            return None;
        }
        let id = VertexId::new(self.label_to_id.len());
        self.label_to_id.insert(label.to_string(), id);
        Some(id)
    }

    /// 通过标签查找顶点
    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.label_to_id.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// 通过顶点 ID 反查标签
    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.label_to_id
            .get_index(id.index())
            .map(|(label, _)| label.as_str())
    }

    /// 按顶点序号遍历 (标签, ID)
    pub fn iter(&self) -> impl Iterator<Item = (&str, VertexId)> {
        self.label_to_id.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.label_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_to_id.is_empty()
    }
}
