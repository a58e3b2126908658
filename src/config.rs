//! 图配置

use serde::{Deserialize, Serialize};

/// 图配置（仅作为预分配提示）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 预计顶点数
    pub vertex_capacity: usize,
    /// 预计边数
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertex_capacity,
            edge_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GraphConfig::default();
        assert_eq!(config.vertex_capacity, 0);
        assert_eq!(config.edge_capacity, 0);
    }

    #[test]
    fn test_config_partial_json() {
        let config: GraphConfig = serde_json::from_str(r#"{"vertex_capacity": 64}"#).unwrap();
        assert_eq!(config, GraphConfig::new(64, 0));

        let config: GraphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
    }
}
