//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 边引用了从未通过 `add_vertices` 插入的标签
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    /// 遍历起点超出顶点范围
    #[error("顶点索引越界: {index} (顶点数 {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
