use crate::agreement::{self, AgreementError};
use crate::fit::{FitError, FitResult};
use crate::model::Model;
use crate::parameters::Parameters;
use crate::plot::{self, PlotError, PlotOptions, ScatterOptions};
use crate::problem::FitProblemBuilder;
use crate::solvers::levmar::LevMarSolver;
use nalgebra::DVector;
use std::path::Path;


/// Fit a model to data and plot the result.
///
/// This is the convenience entry point of the crate. It bundles a [Model] with a
/// [LevMarSolver] and offers the whole workflow: fitting, plotting the fit and querying
/// the fitted parameters. A fit returns its outcome as a [FitResult], which is then
/// passed to the plotting and query functions.
///
/// # Example
/// ```rust
/// # use fitting::prelude::*;
/// let model = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
/// let fitting = Fitting::new(model);
/// let x = [0., 1., 2., 3.];
/// let y = [1., 3., 5., 7.];
/// let outcome = fitting.fit(&x, &y, [("a", 1.), ("b", 1.)]).unwrap();
///
/// assert!((fitting.get_param(&outcome, "a").unwrap() - 2.).abs() < 1e-6);
/// assert!((fitting.get_param(&outcome, "b").unwrap() - 1.).abs() < 1e-6);
/// assert!((fitting.result(&outcome).rsquared() - 1.).abs() < 1e-8);
/// assert_eq!(Fitting::conc(5., 10.).unwrap(), 0.5);
/// ```
#[derive(Debug)]
pub struct Fitting {
    model: Model,
    solver: LevMarSolver,
}

impl Fitting {
    /// Fit the given model with a default Levenberg-Marquardt solver.
    pub fn new(model: Model) -> Self {
        Self::with_solver(model, LevMarSolver::default())
    }

    /// Fit the given model with a configured solver.
    pub fn with_solver(model: Model, solver: LevMarSolver) -> Self {
        Self { model, solver }
    }

    /// the model that is fitted
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Fit the model to the data `y` sampled at `x`, starting from the given initial
    /// guesses. Every model parameter needs exactly one guess.
    ///
    /// # Errors
    ///
    /// Fails if the guesses do not match the model parameters, if the data is
    /// inconsistent (see [FitProblemBuilder::build]) or if the minimization
    /// does not converge.
    pub fn fit<I, S>(&self, x: &[f64], y: &[f64], guesses: I) -> Result<FitResult, FitError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let parameters = self.model.make_params(guesses)?;
        self.fit_with(x, y, parameters, None)
    }

    /// Fit the model starting from the given parameters, which allows fixing some of
    /// them. If weights are given, they multiply the residuals and must contain one
    /// value per data point.
    pub fn fit_with(
        &self,
        x: &[f64],
        y: &[f64],
        parameters: Parameters,
        weights: Option<&[f64]>,
    ) -> Result<FitResult, FitError> {
        let mut builder = FitProblemBuilder::new(self.model.clone())
            .independent_variable(DVector::from_column_slice(x))
            .observations(DVector::from_column_slice(y))
            .parameters(parameters);
        if let Some(weights) = weights {
            builder = builder.weights(DVector::from_column_slice(weights));
        }
        self.solver.fit(builder.build()?)
    }

    /// Plot the data as a line together with the best fit. See [plot::plot].
    pub fn plot(
        &self,
        outcome: &FitResult,
        x: &[f64],
        y: &[f64],
        options: &PlotOptions,
        path: impl AsRef<Path>,
    ) -> Result<(), PlotError> {
        plot::plot(outcome, x, y, options, path)
    }

    /// Plot the data as a scatter plot together with the best fit. See [plot::scatter].
    pub fn scatter(
        &self,
        outcome: &FitResult,
        x: &[f64],
        y: &[f64],
        options: &ScatterOptions,
        path: impl AsRef<Path>,
    ) -> Result<(), PlotError> {
        plot::scatter(outcome, x, y, options, path)
    }

    /// All fitted parameters including their standard errors.
    pub fn get_params<'a>(&self, outcome: &'a FitResult) -> &'a Parameters {
        outcome.params()
    }

    /// Only the fitted value of the parameter with the given name. Its standard error
    /// is available via [Fitting::get_params].
    pub fn get_param(&self, outcome: &FitResult, name: &str) -> Result<f64, FitError> {
        outcome.param_value(name)
    }

    /// The full fit result with all statistics.
    pub fn result<'a>(&self, outcome: &'a FitResult) -> &'a FitResult {
        outcome
    }

    /// The agreement of an experimental with a theoretical value, see [agreement::conc].
    pub fn conc(experimental: f64, theoretical: f64) -> Result<f64, AgreementError> {
        agreement::conc(experimental, theoretical)
    }
}
