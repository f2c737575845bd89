use crate::parameters::ParameterError;
use crate::problem::FitProblemBuilderError;
use crate::statistics::StatisticsError;
use levenberg_marquardt::TerminationReason;
use thiserror::Error as ThisError;

/// The errors that can occur when fitting a model to data or when querying
/// the fitted parameters.
#[derive(Debug, ThisError)]
pub enum FitError {
    /// the data, weights or parameters do not form a valid fitting problem
    #[error("Invalid fitting problem: {0}")]
    Problem(#[from] FitProblemBuilderError),

    /// the initial guesses do not match the model parameters
    #[error("Invalid initial guesses: {0}")]
    InitialGuess(#[from] ParameterError),

    /// the minimization did not terminate successfully
    #[error(
        "Minimization failed with reason {:?} after {} function evaluations.",
        termination,
        evaluations
    )]
    MinimizationFailed {
        /// the reason reported by the minimizer
        termination: TerminationReason,
        /// the number of residual evaluations
        evaluations: usize,
    },

    /// the fit statistics could not be calculated at the solution
    #[error("Fit statistics could not be calculated: {0}")]
    Statistics(#[from] StatisticsError),

    /// a parameter was requested that is not part of the model
    #[error("Parameter '{}' is not part of the fitted model.", name)]
    UnknownParameter {
        /// the requested name
        name: String,
    },
}
