pub use crate::agreement::{conc, AgreementError};
pub use crate::fit::{FitError, FitResult};
pub use crate::fitting::Fitting;
pub use crate::model::errors::{ModelBuildError, ModelError};
pub use crate::model::Model;
pub use crate::model_function::ModelFunction;
pub use crate::parameters::{Parameter, ParameterError, Parameters};
pub use crate::plot::{ErrorBars, PlotError, PlotOptions, ScatterOptions};
pub use crate::problem::{FitProblem, FitProblemBuilder};
pub use crate::solvers::levmar::LevMarSolver;
pub use levenberg_marquardt::LeastSquaresProblem;
