//! 矩阵表示模块
//!
//! 稠密矩阵以及由邻接表导出的邻接矩阵、关联矩阵和拉普拉斯矩阵

mod adjacency;
mod dense;
mod incidence;
mod laplacian;

pub use adjacency::AdjacencyMatrix;
pub use dense::Matrix;
pub use incidence::IncidenceMatrix;
pub use laplacian::LaplacianMatrix;
