use crate::model::Model;
use crate::parameters::Parameters;
use crate::util::Weights;
use levenberg_marquardt::LeastSquaresProblem;
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn, Matrix, Vector};

mod builder;
#[cfg(test)]
mod test;

pub use builder::FitProblemBuilder;
pub use builder::FitProblemBuilderError;

/// This is the problem of fitting a model to data in a form that the
/// [levenberg_marquardt](https://crates.io/crates/levenberg-marquardt) crate can use it to
/// perform the least squares fit.
///
/// The problem minimizes the sum of squares of the *weighted* residuals
/// ```math
/// \vec{r}_w(\vec{p}) = W\cdot(\vec{y}-\vec{f}(\vec{x},\vec{p})),
/// ```
/// where only the parameters that are allowed to vary take part in the minimization.
/// Fixed parameters keep their value.
///
/// # Construction
///
/// Use the [FitProblemBuilder](self::builder::FitProblemBuilder) to create an instance of a
/// fitting problem.
///
/// # Usage
///
/// The problem is usually handed to the [LevMarSolver](crate::solvers::levmar::LevMarSolver),
/// which minimizes it and calculates the fit statistics. It can also be passed to the
/// [LevenbergMarquardt](levenberg_marquardt::LevenbergMarquardt) solver directly.
#[derive(Debug, Clone)]
pub struct FitProblem {
    /// the model we are trying to fit to the data
    pub(crate) model: Model,
    /// the independent variable `$\vec{x}$`
    pub(crate) x: DVector<f64>,
    /// the (unweighted) data `$\vec{y}$`
    pub(crate) y: DVector<f64>,
    /// the builder has checked that the weights have the correct dimension for the data
    pub(crate) weights: Weights,
    /// all model parameters, including the fixed ones. The values of the varied parameters
    /// are the ones that were last set by the solver.
    pub(crate) parameters: Parameters,
    /// indices of the varied parameters in `parameters`
    pub(crate) varied: Vec<usize>,
}

impl FitProblem {
    /// access the contained model immutably
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// the independent variable `$\vec{x}$`
    pub fn independent_variable(&self) -> &DVector<f64> {
        &self.x
    }

    /// the (unweighted) data `$\vec{y}$` to which the model is fitted
    pub fn observations(&self) -> &DVector<f64> {
        &self.y
    }

    /// get the weights of the data for the fitting problem
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// all model parameters with their current values
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// the number of data points
    pub fn data_count(&self) -> usize {
        self.y.len()
    }

    /// the number of parameters that are varied in the fit
    pub fn varied_count(&self) -> usize {
        self.varied.len()
    }

    /// the model evaluated at `$\vec{x}$` with the current parameters
    pub fn model_values(&self) -> DVector<f64> {
        self.model.eval_unchecked(&self.x, &self.parameters.values())
    }

    /// The weighted residuals `$\vec{r}_w = W\cdot(\vec{y}-\vec{f}(\vec{x},\vec{p}))$` at the
    /// current parameters. Returns None if the model produces non-finite values.
    pub fn weighted_residuals(&self) -> Option<DVector<f64>> {
        let residuals = &self.weights * (&self.y - self.model_values());
        residuals
            .iter()
            .all(|r| r.is_finite())
            .then_some(residuals)
    }

    /// The (unweighted) jacobian `$\partial f(x_i,\vec{p})/\partial p_j$` of the model
    /// with respect to the varied parameters at the current parameters.
    pub fn model_jacobian(&self) -> Option<DMatrix<f64>> {
        self.model
            .jacobian(&self.x, &self.parameters.values(), &self.varied)
    }

    pub(crate) fn varied_indices(&self) -> &[usize] {
        &self.varied
    }
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for FitProblem {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    /// Set the values of the varied parameters. The parameters are expected in the order
    /// of the model parameter names, with the fixed parameters left out.
    fn set_params(&mut self, params: &Vector<f64, Dyn, Self::ParameterStorage>) {
        self.parameters
            .set_values_at(&self.varied, params.as_slice());
    }

    /// The values of the varied parameters, see [`LeastSquaresProblem::set_params`].
    fn params(&self) -> Vector<f64, Dyn, Self::ParameterStorage> {
        let values = self.parameters.values();
        DVector::from_iterator(self.varied.len(), self.varied.iter().map(|&idx| values[idx]))
    }

    fn residuals(&self) -> Option<Vector<f64, Dyn, Self::ResidualStorage>> {
        self.weighted_residuals()
    }

    /// The jacobian of the weighted residuals, which is `$-W\cdot J_f$`, where `$J_f$` is the
    /// [model jacobian](FitProblem::model_jacobian).
    fn jacobian(&self) -> Option<Matrix<f64, Dyn, Dyn, Self::JacobianStorage>> {
        let model_jacobian = self.model_jacobian()?;
        Some(-(&self.weights * model_jacobian))
    }
}
