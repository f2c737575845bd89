use nalgebra::{DVector, Dim, Dyn, Matrix, RawStorageMut};
use std::ops::Mul;

/// The weights that are applied to the residuals of a least squares problem.
/// Either unit weights (i.e. unweighted problem) or one weight per data point,
/// which corresponds to a diagonal weight matrix. The weighted residuals are
/// `$\vec{r}_w = W\cdot(\vec{y}-\vec{f})$`, which means the weights multiply the residuals
/// (they are not squared). For data with known standard deviations `$\sigma_i$`,
/// the usual choice is `$w_i = 1/\sigma_i$`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Weights {
    /// unit weights, which means the problem is unweighted
    #[default]
    Unit,
    /// the weights are represented by the diagonal of a diagonal matrix
    Diagonal(DVector<f64>),
}

impl Weights {
    /// create diagonal weights with the given diagonal elements.
    /// Make sure that the dimensions of the weights match the data that they
    /// should be applied to.
    pub fn diagonal(diagonal: DVector<f64>) -> Self {
        Self::Diagonal(diagonal)
    }

    /// check that the weights are appropriately sized for the given data vector, so that
    /// they can be applied without panic. For unit weights this is always true, but for diagonal
    /// weights it is not.
    pub fn is_size_correct_for_data_length(&self, data_len: usize) -> bool {
        match self {
            Weights::Unit => true,
            Weights::Diagonal(diagonal) => diagonal.len() == data_len,
        }
    }

    /// true if all weights are finite numbers
    pub fn is_finite(&self) -> bool {
        match self {
            Weights::Unit => true,
            Weights::Diagonal(diagonal) => diagonal.iter().all(|w| w.is_finite()),
        }
    }
}

/// Multiply the weights to a matrix (or vector) from the left.
/// This is a no-op for unit weights and scales the rows of the matrix
/// for diagonal weights.
/// # Panics
/// If the number of weights does not match the number of rows.
impl<C, S> Mul<Matrix<f64, Dyn, C, S>> for &Weights
where
    C: Dim,
    S: RawStorageMut<f64, Dyn, C>,
{
    type Output = Matrix<f64, Dyn, C, S>;

    fn mul(self, mut rhs: Matrix<f64, Dyn, C, S>) -> Self::Output {
        match self {
            Weights::Unit => rhs,
            Weights::Diagonal(diagonal) => {
                assert_eq!(
                    diagonal.len(),
                    rhs.nrows(),
                    "Matrix dimensions incorrect for diagonal matrix multiplication."
                );
                rhs.column_iter_mut()
                    .for_each(|mut col| col.component_mul_assign(diagonal));
                rhs
            }
        }
    }
}
