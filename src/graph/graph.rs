//! 图数据结构
//!
//! 顶点、边以追加方式存放在两个数组中，彼此通过序号引用。
//! 顶点和边的 ID 一旦分配就不会改变。

use super::edge::{Edge, EdgeId};
use super::index::LabelIndex;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::PathFinder;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// 无向标签图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点序列
    vertices: Vec<Vertex>,
    /// 边序列
    edges: Vec<Edge>,
    /// 标签索引
    labels: LabelIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 按预计规模预分配
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            labels: LabelIndex::with_capacity(vertex_capacity),
        }
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.vertex_capacity, config.edge_capacity)
    }

    // ==================== 构建 ====================

    /// 批量添加顶点
    ///
    /// 已存在的标签直接跳过，不报错，也不会改变已有顶点的 ID。
    /// 返回实际新建的顶点数。
    pub fn add_vertices<I, S>(&mut self, labels: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        let mut skipped = 0;

        for label in labels {
            match self.labels.insert(label.as_ref()) {
                Some(id) => {
                    debug_assert_eq!(id.index(), self.vertices.len());
                    self.vertices.push(Vertex::new());
                    added += 1;
                }
                None => skipped += 1,
            }
        }

        debug!(added, skipped, total = self.vertices.len(), "添加顶点");
        added
    }

    /// 批量添加边
    ///
    /// 先解析整批端点，任一标签不存在则整批拒绝并返回
    /// [`Error::VertexNotFound`]，图保持不变。成功时按顺序返回新边的 ID。
    pub fn add_edges<I, A, B>(&mut self, tuples: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let resolved = tuples
            .into_iter()
            .map(|(a, b)| -> Result<(VertexId, VertexId)> {
                Ok((self.resolve(a.as_ref())?, self.resolve(b.as_ref())?))
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                warn!(error = %e, "边批次被拒绝");
                e
            })?;

        let mut ids = Vec::with_capacity(resolved.len());
        for (v0, v1) in resolved {
            let id = EdgeId::new(self.edges.len());
            self.edges.push(Edge::new(v0, v1));
            self.vertices[v0.index()].push_edge(id);
            self.vertices[v1.index()].push_edge(id);
            ids.push(id);
        }

        debug!(added = ids.len(), total = self.edges.len(), "添加边");
        Ok(ids)
    }

    fn resolve(&self, label: &str) -> Result<VertexId> {
        self.labels
            .get(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    // ==================== 遍历标记 ====================

    /// 清除所有顶点的遍历标记
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.set_explored(false);
        }
    }

    /// 从 `start` 开始广度优先遍历，将所有可达顶点标记为已访问。
    ///
    /// 只增加标记，不清除：不可达顶点的标记保持原样。
    /// 需要干净的一轮遍历时先调用 [`Graph::reset`]。
    pub fn bfs(&mut self, start: VertexId) -> Result<()> {
        let reached = PathFinder::new(self).bfs(start)?;
        debug!(start = %start, reached = reached.len(), "BFS 完成");

        for id in reached.iter() {
            self.vertices[id.index()].set_explored(true);
        }
        Ok(())
    }

    /// 单源最短跳数，结果以标签为键、按顶点序号排列，不可达顶点不出现。
    ///
    /// 使用独立的访问状态，不修改遍历标记。
    pub fn shortest_path(&self, start: VertexId) -> Result<IndexMap<String, usize>> {
        PathFinder::new(self).shortest_path(start)
    }

    pub fn is_explored(&self, id: VertexId) -> Option<bool> {
        self.vertex(id).map(Vertex::is_explored)
    }

    /// 当前已标记的顶点（按 ID 升序）
    pub fn explored_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_explored())
            .map(|(i, _)| VertexId::new(i))
            .collect()
    }

    // ==================== 查询 ====================

    /// 校验顶点 ID
    pub fn check_index(&self, id: VertexId) -> Result<()> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: id.index(),
                len: self.vertices.len(),
            })
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 通过标签查找顶点 ID
    pub fn index_of(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label)
    }

    /// 通过顶点 ID 反查标签
    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.labels.label_of(id)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn label_index(&self) -> &LabelIndex {
        &self.labels
    }

    /// 获取邻居（平行边会重复出现，自环返回自身）
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .map(Vertex::edges)
            .unwrap_or(&[])
            .iter()
            .map(move |e| self.edges[e.index()].other(id))
    }

    /// 获取顶点度数（自环计两次）
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).map(Vertex::degree).unwrap_or(0)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// s-a-b-c-d-e 示例图
    fn create_test_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertices(["s", "a", "b", "c", "d", "e"]);
        graph
            .add_edges([
                ("s", "a"),
                ("s", "b"),
                ("a", "c"),
                ("b", "c"),
                ("b", "d"),
                ("c", "d"),
                ("c", "e"),
                ("d", "e"),
            ])
            .unwrap();
        graph
    }

    fn id(graph: &Graph, label: &str) -> VertexId {
        graph.index_of(label).unwrap()
    }

    #[test]
    fn test_add_vertices_assigns_positions() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_vertices(["x", "y", "z"]), 3);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.index_of("x"), Some(VertexId::new(0)));
        assert_eq!(graph.index_of("z"), Some(VertexId::new(2)));
        assert_eq!(graph.label_of(VertexId::new(1)), Some("y"));
        assert!(graph.vertices().iter().all(|v| v.edges().is_empty() && !v.is_explored()));
    }

    #[test]
    fn test_add_vertices_idempotent() {
        let mut graph = create_test_graph();
        let before: Vec<(String, VertexId)> = graph
            .label_index()
            .iter()
            .map(|(l, v)| (l.to_string(), v))
            .collect();

        assert_eq!(graph.add_vertices(["a", "s", "a"]), 0);

        let after: Vec<(String, VertexId)> = graph
            .label_index()
            .iter()
            .map(|(l, v)| (l.to_string(), v))
            .collect();
        assert_eq!(before, after);
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn test_add_vertices_overlapping_batches() {
        let mut graph = Graph::new();
        graph.add_vertices(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(graph.add_vertices(["b", "c", "c"]), 1);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.index_of("c"), Some(VertexId::new(2)));
    }

    #[test]
    fn test_adjacency_symmetry() {
        let graph = create_test_graph();

        for (i, edge) in graph.edges().iter().enumerate() {
            let eid = EdgeId::new(i);
            for (v, vertex) in graph.vertices().iter().enumerate() {
                let listed = vertex.edges().contains(&eid);
                assert_eq!(listed, edge.touches(VertexId::new(v)));
            }
        }
    }

    #[test]
    fn test_add_edges_order() {
        let mut graph = Graph::new();
        graph.add_vertices(["p", "q"]);
        let ids = graph.add_edges([("p", "q"), ("q", "p")]).unwrap();

        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(1)]);
        let e = graph.edge(EdgeId::new(1)).unwrap();
        assert_eq!(e.v0(), id(&graph, "q"));
        assert_eq!(e.v1(), id(&graph, "p"));
        assert_eq!(graph.vertex(id(&graph, "p")).unwrap().edges(), &ids[..]);
    }

    #[test]
    fn test_add_edges_self_loop() {
        let mut graph = Graph::new();
        graph.add_vertices(["x"]);
        graph.add_edges([("x", "x")]).unwrap();

        let x = id(&graph, "x");
        assert_eq!(graph.degree(x), 2);
        assert_eq!(graph.neighbors(x).collect::<Vec<_>>(), vec![x, x]);
    }

    #[test]
    fn test_add_edges_unknown_label() {
        let mut graph = create_test_graph();

        let err = graph.add_edges([("s", "nope")]).unwrap_err();
        assert_eq!(err, Error::VertexNotFound("nope".to_string()));
        assert!(!graph.contains_label("nope"));
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn test_add_edges_batch_atomic() {
        let mut graph = create_test_graph();
        let degree_s = graph.degree(id(&graph, "s"));

        let result = graph.add_edges([("s", "e"), ("a", "b"), ("ghost", "a")]);
        assert!(matches!(result, Err(Error::VertexNotFound(ref l)) if l == "ghost"));

        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.degree(id(&graph, "s")), degree_s);
    }

    #[test]
    fn test_neighbors() {
        let graph = create_test_graph();
        let c = id(&graph, "c");

        let mut labels: Vec<&str> = graph
            .neighbors(c)
            .map(|v| graph.label_of(v).unwrap())
            .collect();
        labels.sort();
        assert_eq!(labels, vec!["a", "b", "d", "e"]);
        assert_eq!(graph.neighbors(VertexId::new(99)).count(), 0);
    }

    #[test]
    fn test_bfs_marks_all() {
        let mut graph = create_test_graph();
        graph.bfs(id(&graph, "s")).unwrap();

        assert_eq!(graph.explored_vertices().len(), 6);
    }

    #[test]
    fn test_bfs_leaves_unreachable() {
        let mut graph = create_test_graph();
        graph.add_vertices(["island", "other"]);
        graph.add_edges([("island", "other")]).unwrap();

        graph.bfs(id(&graph, "island")).unwrap();
        assert_eq!(
            graph.explored_vertices(),
            vec![id(&graph, "island"), id(&graph, "other")]
        );

        // 第二次遍历不清除之前的标记
        graph.bfs(id(&graph, "e")).unwrap();
        assert_eq!(graph.explored_vertices().len(), 8);

        graph.reset();
        assert!(graph.explored_vertices().is_empty());
        graph.reset();
        assert!(graph.explored_vertices().is_empty());
    }

    #[test]
    fn test_bfs_expands_through_stale_marks() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c", "d", "x", "y"]);
        graph
            .add_edges([("a", "b"), ("b", "c"), ("c", "d"), ("x", "y")])
            .unwrap();

        // b 和 x 带着上一轮的标记
        for label in ["b", "x"] {
            let v = id(&graph, label);
            graph.vertices[v.index()].set_explored(true);
        }

        graph.bfs(id(&graph, "a")).unwrap();

        for label in ["a", "b", "c", "d"] {
            assert_eq!(graph.is_explored(id(&graph, label)), Some(true), "{}", label);
        }
        assert_eq!(graph.is_explored(id(&graph, "x")), Some(true));
        assert_eq!(graph.is_explored(id(&graph, "y")), Some(false));
    }

    #[test]
    fn test_bfs_out_of_range() {
        let mut graph = create_test_graph();
        let err = graph.bfs(VertexId::new(6)).unwrap_err();

        assert_eq!(err, Error::IndexOutOfRange { index: 6, len: 6 });
        assert!(graph.explored_vertices().is_empty());
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();
        let distances = graph.shortest_path(id(&graph, "s")).unwrap();

        let expected = [("s", 0), ("a", 1), ("b", 1), ("c", 2), ("d", 2), ("e", 3)];
        assert_eq!(distances.len(), expected.len());
        for (label, d) in expected {
            assert_eq!(distances[label], d, "distance of {}", label);
        }
        assert!(graph.explored_vertices().is_empty());
    }

    #[test]
    fn test_with_config() {
        let graph = Graph::with_config(&GraphConfig::new(16, 32));
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
