/// Errors that can occur during Gauss-Seidel solving.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expected an augmented n x (n + 1) system, got {rows} x {cols}")]
    NotAugmented { rows: usize, cols: usize },

    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal { row: usize },
}
