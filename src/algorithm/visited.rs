//! 单次遍历的访问状态
//!
//! 由调用方持有，与图拓扑分离，多个只读遍历可以同时进行。

use crate::graph::VertexId;

/// 按顶点序号索引的访问标记
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visited {
    marks: Vec<bool>,
    count: usize,
}

impl Visited {
    /// 为 `vertex_count` 个顶点创建空标记集
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![false; vertex_count],
            count: 0,
        }
    }

    /// 标记顶点，首次标记返回 true
    pub fn insert(&mut self, id: VertexId) -> bool {
        let i = id.index();
        if i >= self.marks.len() {
            self.marks.resize(i + 1, false);
        }
        if self.marks[i] {
            return false;
        }
        self.marks[i] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.marks.get(id.index()).copied().unwrap_or(false)
    }

    /// 已标记顶点数
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 按 ID 升序遍历已标记顶点
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, &marked)| marked)
            .map(|(i, _)| VertexId::new(i))
    }

    pub fn clear(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = false);
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_insert() {
        let mut visited = Visited::new(4);

        assert!(visited.insert(VertexId::new(2)));
        assert!(!visited.insert(VertexId::new(2)));
        assert!(visited.insert(VertexId::new(0)));

        assert!(visited.contains(VertexId::new(2)));
        assert!(!visited.contains(VertexId::new(1)));
        assert!(!visited.contains(VertexId::new(100)));
        assert_eq!(visited.len(), 2);
        assert_eq!(
            visited.iter().collect::<Vec<_>>(),
            vec![VertexId::new(0), VertexId::new(2)]
        );
    }

    #[test]
    fn test_visited_grows() {
        let mut visited = Visited::new(0);
        assert!(visited.is_empty());

        assert!(visited.insert(VertexId::new(5)));
        assert!(visited.contains(VertexId::new(5)));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_clear() {
        let mut visited = Visited::new(3);
        visited.insert(VertexId::new(1));
        visited.clear();

        assert!(visited.is_empty());
        assert!(!visited.contains(VertexId::new(1)));
    }
}
