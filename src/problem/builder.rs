use crate::model::Model;
use crate::parameters::Parameters;
use crate::problem::FitProblem;
use crate::util::Weights;
use nalgebra::DVector;
use thiserror::Error as ThisError;

/// Errors pertaining to use errors of the [FitProblemBuilder]
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum FitProblemBuilderError {
    /// the data for the x variable was not given to the builder
    #[error("Independent variable x not provided")]
    XDataMissing,

    /// the data for the y variable was not given to the builder
    #[error("Observations y not provided")]
    YDataMissing,

    /// no parameters were given to the builder
    #[error("Initial parameters not provided")]
    ParametersMissing,

    /// x and y vector have different lengths
    #[error(
        "Vectors x and y must have same lengths. Given x length = {} and y length = {}",
        x_length,
        y_length
    )]
    InvalidLengthOfData {
        /// length of x
        x_length: usize,
        /// length of y
        y_length: usize,
    },

    /// the provided x and y vectors must not have zero elements
    #[error("x or y must have nonzero number of elements.")]
    ZeroLengthVector,

    /// x or y contain NaN or infinite values
    #[error("x and y must only contain finite values.")]
    NonFiniteData,

    /// y vector and weights have different lengths
    #[error("The weights must have the same length as the data y.")]
    InvalidLengthOfWeights,

    /// the weights contain NaN or infinite values
    #[error("The weights must only contain finite values.")]
    NonFiniteWeights,

    /// the parameters do not belong to the model
    #[error(
        "The given parameters {:?} do not match the model parameters {:?}.",
        given,
        expected
    )]
    ParameterMismatch {
        /// the model parameters
        expected: Vec<String>,
        /// the names of the given parameters
        given: Vec<String>,
    },

    /// all parameters are fixed
    #[error("At least one parameter must be varied in the fit.")]
    NoVariedParameters,

    /// there are fewer data points than varied parameters
    #[error(
        "The fit is underdetermined: {} data points for {} varied parameters.",
        data_count,
        varied_count
    )]
    Underdetermined {
        /// the number of data points
        data_count: usize,
        /// the number of varied parameters
        varied_count: usize,
    },

    /// the model does not produce finite values at the initial parameters
    #[error("The model produces non-finite values for the initial parameters.")]
    NonFiniteModelOutput,
}

/// A builder structure to create a [FitProblem], which can be used for
/// fitting a model to data.
/// # Example
/// ```rust
/// # use nalgebra::DVector;
/// # use fitting::model::Model;
/// # use fitting::problem::FitProblemBuilder;
/// let model = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
/// let params = model.make_params([("a", 1.), ("b", 1.)]).unwrap();
/// let problem = FitProblemBuilder::new(model)
///     .independent_variable(DVector::from_vec(vec![0., 1., 2., 3.]))
///     .observations(DVector::from_vec(vec![1., 3., 5., 7.]))
///     .parameters(params)
///     .build()
///     .unwrap();
/// assert_eq!(problem.data_count(), 4);
/// ```
///
/// # Building a Problem
///
/// The independent variable, the observations and the initial parameters are
/// mandatory. Weights are optional; without them the problem is unweighted. After all
/// mandatory fields have been filled, the [build](FitProblemBuilder::build) method returns
/// the finished problem iff all fields have valid values. Otherwise it returns an error variant.
#[derive(Debug, Clone)]
pub struct FitProblemBuilder {
    /// Required: the model to be fitted to the data
    model: Model,
    /// Required: the independent variable `$\vec{x}$`
    x: Option<DVector<f64>>,
    /// Required: the data `$\vec{y}(\vec{x})$` that we want to fit
    y: Option<DVector<f64>>,
    /// Required: the initial parameters, which also decide which parameters are varied
    parameters: Option<Parameters>,
    /// Optional: weights to be applied to the residuals. Must have the same length as y.
    weights: Weights,
}

impl FitProblemBuilder {
    /// Create a new builder based on the given model
    pub fn new(model: Model) -> Self {
        Self {
            model,
            x: None,
            y: None,
            parameters: None,
            weights: Weights::default(),
        }
    }

    /// **Mandatory**: the independent variable `$\vec{x}$`
    pub fn independent_variable(self, x: DVector<f64>) -> Self {
        Self { x: Some(x), ..self }
    }

    /// **Mandatory**: the observations `$\vec{y}$` we want to fit. Must have the same
    /// length as `$\vec{x}$`.
    pub fn observations(self, y: DVector<f64>) -> Self {
        Self { y: Some(y), ..self }
    }

    /// **Mandatory**: the initial parameters, typically created with
    /// [Model::make_params](crate::model::Model::make_params).
    pub fn parameters(self, parameters: Parameters) -> Self {
        Self {
            parameters: Some(parameters),
            ..self
        }
    }

    /// **Optional**: one weight per data point that multiplies the residuals.
    pub fn weights(self, weights: DVector<f64>) -> Self {
        Self {
            weights: Weights::diagonal(weights),
            ..self
        }
    }

    /// build the problem after checking the provided data for consistency
    pub fn build(self) -> Result<FitProblem, FitProblemBuilderError> {
        let Self {
            model,
            x,
            y,
            parameters,
            weights,
        } = self;

        let x = x.ok_or(FitProblemBuilderError::XDataMissing)?;
        let y = y.ok_or(FitProblemBuilderError::YDataMissing)?;
        let parameters = parameters.ok_or(FitProblemBuilderError::ParametersMissing)?;

        if x.len() != y.len() {
            return Err(FitProblemBuilderError::InvalidLengthOfData {
                x_length: x.len(),
                y_length: y.len(),
            });
        }

        if x.is_empty() {
            return Err(FitProblemBuilderError::ZeroLengthVector);
        }

        if x.iter().chain(y.iter()).any(|value| !value.is_finite()) {
            return Err(FitProblemBuilderError::NonFiniteData);
        }

        if !weights.is_size_correct_for_data_length(y.len()) {
            return Err(FitProblemBuilderError::InvalidLengthOfWeights);
        }

        if !weights.is_finite() {
            return Err(FitProblemBuilderError::NonFiniteWeights);
        }

        if parameters.names() != model.parameters() {
            return Err(FitProblemBuilderError::ParameterMismatch {
                expected: model.parameters().to_vec(),
                given: parameters.names().into_iter().map(String::from).collect(),
            });
        }

        let varied = parameters.varied_indices();
        if varied.is_empty() {
            return Err(FitProblemBuilderError::NoVariedParameters);
        }

        if y.len() < varied.len() {
            return Err(FitProblemBuilderError::Underdetermined {
                data_count: y.len(),
                varied_count: varied.len(),
            });
        }

        let problem = FitProblem {
            model,
            x,
            y,
            weights,
            parameters,
            varied,
        };

        if problem.weighted_residuals().is_none() {
            return Err(FitProblemBuilderError::NonFiniteModelOutput);
        }

        Ok(problem)
    }
}
