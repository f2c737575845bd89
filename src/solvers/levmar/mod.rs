use crate::fit::{FitError, FitResult};
use crate::problem::FitProblem;
use crate::statistics::FitStatistics;
use levenberg_marquardt::{LevenbergMarquardt, MinimizationReport};


/// A thin wrapper around the
/// [`LevenbergMarquardt`](https://docs.rs/levenberg-marquardt/latest/levenberg_marquardt/struct.LevenbergMarquardt.html)
/// solver from the `levenberg_marquardt` crate. The core benefit of this
/// wrapper is that it returns the best fit parameters together with the
/// fit statistics in a [`FitResult`].
///
/// # Usage
///
/// The solver with default settings is obtained with `LevMarSolver::default()`.
/// To configure tolerances or the evaluation budget, configure a
/// [`LevenbergMarquardt`] instance and pass it to [`LevMarSolver::with_solver`].
#[derive(Debug)]
pub struct LevMarSolver {
    solver: LevenbergMarquardt<f64>,
}

impl LevMarSolver {
    /// creates a new solver with default settings
    pub fn new() -> Self {
        Self::with_solver(LevenbergMarquardt::new())
    }

    /// creates a wrapper around the given levenberg-marquardt solver
    /// from the levenberg-marquardt crate.
    pub fn with_solver(solver: LevenbergMarquardt<f64>) -> Self {
        Self { solver }
    }

    /// Run the minimization on the problem and return the problem after the minimization
    /// together with the minimization report, regardless of whether the minimization
    /// was successful or not.
    pub fn minimize(&self, problem: FitProblem) -> (FitProblem, MinimizationReport<f64>) {
        self.solver.minimize(problem)
    }

    /// Try to solve the given fitting problem.
    ///
    /// # Returns
    ///
    /// If the minimization was deemed successful by the minimizer, the result contains
    /// the best fit parameters with their standard errors and the fit statistics.
    /// Otherwise an error is returned that contains the reason why the minimization
    /// terminated.
    pub fn fit(&self, problem: FitProblem) -> Result<FitResult, FitError> {
        let (problem, report) = self.minimize(problem);
        if !report.termination.was_successful() {
            return Err(FitError::MinimizationFailed {
                termination: report.termination,
                evaluations: report.number_of_evaluations,
            });
        }
        let statistics = FitStatistics::try_calculate(&problem)?;
        Ok(FitResult::new(problem, statistics, report))
    }
}

impl Default for LevMarSolver {
    fn default() -> Self {
        Self::new()
    }
}
