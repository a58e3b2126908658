//! 广度优先遍历与无权最短路径
//!
//! 所有查询只读访问图拓扑，访问状态和距离表都属于单次调用。

use super::visited::Visited;
use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::VecDeque;
use std::ops::ControlFlow;
use tracing::debug;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列
    pub edges: Vec<EdgeId>,
    /// 路径长度（跳数）
    pub length: usize,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            length: 0,
        }
    }
}

/// 路径查找器
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// BFS 主循环
    ///
    /// 顶点在首次发现时立即标记并入队，每条关联边调用一次 `discover(父, 边, 子)`，
    /// 返回 `Break` 时提前结束。
    fn search<F>(&self, start: VertexId, visited: &mut Visited, mut discover: F) -> Result<()>
    where
        F: FnMut(VertexId, EdgeId, VertexId) -> ControlFlow<()>,
    {
        self.graph.check_index(start)?;

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(vertex) = self.graph.vertex(current) else {
                continue;
            };
            for &edge_id in vertex.edges() {
                let Some(edge) = self.graph.edge(edge_id) else {
                    continue;
                };
                let neighbor = edge.other(current);
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                    if discover(current, edge_id, neighbor).is_break() {
                        return Ok(());
                    }
                }
            }
        }

        Ok(())
    }

    /// 可达顶点集（每次调用使用新的访问状态）
    pub fn bfs(&self, start: VertexId) -> Result<Visited> {
        let mut visited = Visited::new(self.graph.vertex_count());
        self.bfs_from(start, &mut visited)?;
        Ok(visited)
    }

    /// 在已有访问状态上继续遍历，返回本次发现的顶点（按发现顺序，含起点）。
    ///
    /// 已标记的顶点不会再被扩展。
    pub fn bfs_from(&self, start: VertexId, visited: &mut Visited) -> Result<Vec<VertexId>> {
        let mut order = vec![start];
        self.search(start, visited, |_, _, w| {
            order.push(w);
            ControlFlow::Continue(())
        })?;
        Ok(order)
    }

    /// 按顶点序号索引的跳数，不可达为 `None`
    pub fn hop_distances(&self, start: VertexId) -> Result<Vec<Option<usize>>> {
        let mut distances = vec![None; self.graph.vertex_count()];
        let mut visited = Visited::new(self.graph.vertex_count());

        self.graph.check_index(start)?;
        distances[start.index()] = Some(0);
        self.search(start, &mut visited, |v, _, w| {
            distances[w.index()] = distances[v.index()].map(|d: usize| d + 1);
            ControlFlow::Continue(())
        })?;

        Ok(distances)
    }

    /// 单源最短跳数，以标签为键、按顶点序号排列，不可达顶点不出现
    pub fn shortest_path(&self, start: VertexId) -> Result<IndexMap<String, usize>> {
        let distances = self.hop_distances(start)?;

        let result: IndexMap<String, usize> = distances
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| {
                let label = self.graph.label_of(VertexId::new(i))?;
                d.map(|d| (label.to_string(), d))
            })
            .collect();

        debug!(start = %start, reached = result.len(), "最短路径计算完成");
        Ok(result)
    }

    /// 多个起点并行计算最短跳数，结果顺序与 `starts` 一致
    pub fn shortest_paths(&self, starts: &[VertexId]) -> Result<Vec<IndexMap<String, usize>>> {
        starts
            .par_iter()
            .map(|&start| self.shortest_path(start))
            .collect()
    }

    /// 两点之间的一条最短路径，不连通返回 `None`
    pub fn path_between(&self, start: VertexId, end: VertexId) -> Result<Option<PathResult>> {
        self.graph.check_index(end)?;
        self.graph.check_index(start)?;
        if start == end {
            return Ok(Some(PathResult::with_start(start)));
        }

        let mut parent: Vec<Option<(VertexId, EdgeId)>> = vec![None; self.graph.vertex_count()];
        let mut visited = Visited::new(self.graph.vertex_count());
        let mut found = false;

        self.search(start, &mut visited, |v, e, w| {
            parent[w.index()] = Some((v, e));
            if w == end {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;

        if !found {
            return Ok(None);
        }
        Ok(Some(Self::reconstruct_path(start, end, &parent)))
    }

    /// 沿父指针从终点回溯到起点
    fn reconstruct_path(
        start: VertexId,
        end: VertexId,
        parent: &[Option<(VertexId, EdgeId)>],
    ) -> PathResult {
        let mut vertices = vec![end];
        let mut edges = Vec::new();
        let mut current = end;

        while current != start {
            match parent[current.index()] {
                Some((prev, edge_id)) => {
                    edges.push(edge_id);
                    vertices.push(prev);
                    current = prev;
                }
                None => break,
            }
        }

        vertices.reverse();
        edges.reverse();

        PathResult {
            length: edges.len(),
            vertices,
            edges,
        }
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        Ok(self.path_between(start, end)?.is_some())
    }

    /// 恰好 n 跳的邻居（按 ID 升序）
    pub fn n_hop_neighbors(&self, start: VertexId, n: usize) -> Result<Vec<VertexId>> {
        Ok(self
            .hop_distances(start)?
            .into_iter()
            .enumerate()
            .filter(|&(_, d)| d == Some(n))
            .map(|(i, _)| VertexId::new(i))
            .collect())
    }
}
