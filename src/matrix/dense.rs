//! 稠密矩阵
//!
//! 按行优先存放在一段连续缓冲区中，只支持按 (行, 列) 读写，不支持删除行列

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// 行优先的稠密矩阵
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Clone + Default> Matrix<T> {
    /// 创建以 `T::default()` 填充的矩阵
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// 创建以 `value` 填充的矩阵
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * columns],
            rows,
            columns,
        }
    }

    /// 转置
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.columns {
            for r in 0..self.rows {
                data.push(self.data[r * self.columns + c].clone());
            }
        }
        Self {
            data,
            rows: self.columns,
            columns: self.rows,
        }
    }
}

impl<T> Matrix<T> {
    /// 由行优先数据构造，长度必须等于 `rows * columns`
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * columns {
            return Err(Error::DimensionMismatch {
                expected: rows * columns,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.offset(row, column).map(move |i| &mut self.data[i])
    }

    /// 写入单元格，越界时返回 `IndexOutOfBounds`
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let (rows, columns) = (self.rows, self.columns);
        let cell = self.get_mut(row, column).ok_or(Error::IndexOutOfBounds {
            row,
            column,
            rows,
            columns,
        })?;
        *cell = value;
        Ok(())
    }

    /// 第 `row` 行
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.columns..(row + 1) * self.columns])
    }

    /// 按行遍历
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.offset(row, column) {
            Some(i) => &self.data[i],
            None => panic!(
                "矩阵下标越界: ({}, {}) 超出 {}x{}",
                row, column, self.rows, self.columns
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.offset(row, column) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "矩阵下标越界: ({}, {}) 超出 {}x{}",
                row, column, self.rows, self.columns
            ),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            write!(f, "[")?;
            for value in row {
                write!(f, "{:>4}", value)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_new_and_index() {
        let mut m: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert!(!m.is_square());
        assert!(m.as_slice().iter().all(|&v| v == 0));

        m[(1, 2)] = 7;
        assert_eq!(m[(1, 2)], 7);
        assert_eq!(m.get(1, 2), Some(&7));
        assert_eq!(m.row(1), Some(&[0, 0, 7][..]));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_matrix_filled() {
        let m = Matrix::filled(2, 2, 9u8);
        assert!(m.is_square());
        assert_eq!(m.as_slice(), &[9, 9, 9, 9]);
    }

    #[test]
    fn test_matrix_set_out_of_bounds() {
        let mut m: Matrix<u32> = Matrix::new(2, 2);
        assert!(m.set(0, 1, 4).is_ok());
        assert_eq!(
            m.set(2, 0, 1).unwrap_err(),
            Error::IndexOutOfBounds {
                row: 2,
                column: 0,
                rows: 2,
                columns: 2
            }
        );
        assert_eq!(m[(0, 1)], 4);
    }

    #[test]
    #[should_panic]
    fn test_matrix_index_panics() {
        let m: Matrix<u32> = Matrix::new(1, 1);
        let _value: u32 = m[(0, 1)];
    }

    #[test]
    fn test_matrix_from_vec_and_transpose() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.columns()), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), m);

        assert_eq!(
            Matrix::from_vec(2, 2, vec![1]).unwrap_err(),
            Error::DimensionMismatch {
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn test_matrix_display() {
        let m = Matrix::from_vec(2, 2, vec![1, -1, 0, 2]).unwrap();
        assert_eq!(m.to_string(), "[   1  -1 ]\n[   0   2 ]\n");
    }
}
