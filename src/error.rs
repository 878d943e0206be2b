//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("矩阵下标越界: ({row}, {column}) 超出 {rows}x{columns}")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("矩阵维度不匹配: 期望 {expected} 个元素, 实际 {actual} 个")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl Error {
    /// 由任意顶点标识构造 `VertexNotFound`
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound(format!("{:?}", vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::vertex_not_found(&7usize);
        assert_eq!(e, Error::VertexNotFound("7".to_string()));
        assert!(e.to_string().contains('7'));

        let e = Error::IndexOutOfBounds {
            row: 3,
            column: 1,
            rows: 2,
            columns: 2,
        };
        assert!(e.to_string().contains("2x2"));
    }
}
