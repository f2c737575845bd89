#[cfg(any(test, doctest))]
mod test;

use nalgebra::{DMatrix, DVector};

mod weights;
pub use weights::Weights;

/// Calculate the jacobian `$\partial f_i/\partial p_j$` of a vector valued function `$\vec{f}(\vec{p})$`
/// with central finite differences, where `j` runs only over the given parameter indices.
/// The step for parameter `$p_j$` is `$h_j = \epsilon^{1/3}\max(|p_j|,1)$`, with `$\epsilon$` being
/// the machine epsilon.
///
/// Returns None if the function returns None or produces non-finite values for
/// any of the evaluations.
pub(crate) fn central_difference_jacobian<F>(
    function: F,
    params: &[f64],
    indices: &[usize],
) -> Option<DMatrix<f64>>
where
    F: Fn(&[f64]) -> Option<DVector<f64>>,
{
    let mut shifted = params.to_vec();
    let mut columns = Vec::with_capacity(indices.len());
    for &idx in indices {
        let step = f64::EPSILON.cbrt() * params[idx].abs().max(1.);
        shifted[idx] = params[idx] + step;
        let forward = function(&shifted)?;
        shifted[idx] = params[idx] - step;
        let backward = function(&shifted)?;
        shifted[idx] = params[idx];
        let column = (forward - backward) / (2. * step);
        if column.iter().any(|value| !value.is_finite()) {
            return None;
        }
        columns.push(column);
    }

    if columns.is_empty() {
        let nrows = function(params)?.len();
        return Some(DMatrix::zeros(nrows, 0));
    }
    Some(DMatrix::from_columns(&columns))
}
