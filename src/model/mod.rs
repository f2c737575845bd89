use crate::model_function::ModelFunction;
use crate::parameters::{ParameterError, Parameters};
use crate::util::central_difference_jacobian;
use errors::{ModelBuildError, ModelError};
use nalgebra::{DMatrix, DVector};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// errors of building and evaluating models
pub mod errors;

/// The type-erased model function `$f(x,\vec{p})$`, taking the independent variable
/// and the complete parameter slice in the order of the model parameter names.
pub type ModelFuncType = Arc<dyn Fn(f64, &[f64]) -> f64 + Send + Sync>;

/// # A Model
/// A model is a scalar function `$f(x,\vec{p})$` which depends on
/// * the independent variable `$x$`, e.g. a location, time, etc...
/// * the model parameters `$\vec{p}=(p_1,\dots,p_N)^T$`, which are found by the fit.
///
/// Each parameter has a unique name. The names define the order in which the parameter
/// values are handed to the function.
///
/// # Example
/// ```rust
/// use fitting::model::Model;
/// let model = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
/// assert_eq!(model.parameter_count(), 2);
/// assert_eq!(model.eval_at(3., &[2., 1.]).unwrap(), 7.);
/// ```
#[derive(Clone)]
pub struct Model {
    /// the parameter names of the model. Nonempty and unique.
    parameter_names: Vec<String>,
    /// a name for display purposes only
    name: Option<String>,
    function: ModelFuncType,
}

impl Model {
    /// Create a model from a function `Fn(f64,f64,...)->f64` whose first argument is
    /// the independent variable, followed by the parameters in the order of
    /// `parameter_names`.
    ///
    /// # Errors
    /// If the parameter names are empty, contain duplicates or commas, or if their number
    /// does not match the number of parameter arguments of the function.
    pub fn new<StrType, ArgList, F>(
        parameter_names: &[StrType],
        function: F,
    ) -> Result<Self, ModelBuildError>
    where
        StrType: AsRef<str>,
        F: ModelFunction<ArgList> + Send + Sync + 'static,
    {
        let parameter_names = check_parameter_names(parameter_names)?;
        if parameter_names.len() != F::ARGUMENT_COUNT {
            return Err(ModelBuildError::IncorrectParameterCount {
                string_params_count: parameter_names.len(),
                function_argument_count: F::ARGUMENT_COUNT,
                params: parameter_names,
            });
        }
        Ok(Self {
            parameter_names,
            name: None,
            function: Arc::new(move |x, params| function.eval(x, params)),
        })
    }

    /// Create a model from a function that receives all parameters as one slice. This
    /// is useful for models with many parameters. The slice handed to the function
    /// always has as many elements as there are parameter names.
    pub fn from_slice_function<StrType, F>(
        parameter_names: &[StrType],
        function: F,
    ) -> Result<Self, ModelBuildError>
    where
        StrType: AsRef<str>,
        F: Fn(f64, &[f64]) -> f64 + Send + Sync + 'static,
    {
        Ok(Self {
            parameter_names: check_parameter_names(parameter_names)?,
            name: None,
            function: Arc::new(function),
        })
    }

    /// give the model a name, which is used in the fit report
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// the display name of the model
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the parameter names of the model
    pub fn parameters(&self) -> &[String] {
        &self.parameter_names
    }

    /// Get the number of parameters of the model
    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }

    /// Create the parameter collection for this model from a mapping of
    /// parameter names to initial guesses. Every model parameter needs exactly one guess.
    pub fn make_params<I, S>(&self, guesses: I) -> Result<Parameters, ParameterError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Parameters::from_guesses(&self.parameter_names, guesses)
    }

    /// evaluate the model at a single location `x` with the given parameter values.
    pub fn eval_at(&self, x: f64, params: &[f64]) -> Result<f64, ModelError> {
        self.check_parameter_count(params)?;
        Ok((self.function)(x, params))
    }

    /// evaluate the model at every location of `x` with the given parameter values.
    pub fn eval(&self, x: &DVector<f64>, params: &[f64]) -> Result<DVector<f64>, ModelError> {
        self.check_parameter_count(params)?;
        Ok(self.eval_unchecked(x, params))
    }

    /// caller guarantees that `params` has one value per model parameter
    pub(crate) fn eval_unchecked(&self, x: &DVector<f64>, params: &[f64]) -> DVector<f64> {
        debug_assert_eq!(params.len(), self.parameter_count());
        x.map(|x| (self.function)(x, params))
    }

    /// The jacobian `$\partial f(x_i,\vec{p})/\partial p_j$` of the model at the locations `x`,
    /// where `j` runs over the given parameter indices only. Calculated with central
    /// finite differences. Returns None if the model produces non-finite values.
    pub(crate) fn jacobian(
        &self,
        x: &DVector<f64>,
        params: &[f64],
        indices: &[usize],
    ) -> Option<DMatrix<f64>> {
        central_difference_jacobian(|p| Some(self.eval_unchecked(x, p)), params, indices)
    }

    fn check_parameter_count(&self, params: &[f64]) -> Result<(), ModelError> {
        if params.len() != self.parameter_count() {
            return Err(ModelError::IncorrectParameterCount {
                expected: self.parameter_count(),
                actual: params.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("parameter_names", &self.parameter_names)
            .finish_non_exhaustive()
    }
}

/// check that the parameter names are a nonempty list of unique, nonempty
/// names without commas and turn them into owned strings.
fn check_parameter_names<StrType: AsRef<str>>(
    parameter_names: &[StrType],
) -> Result<Vec<String>, ModelBuildError> {
    let names: Vec<String> = parameter_names
        .iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    if names.is_empty() {
        return Err(ModelBuildError::EmptyParameters);
    }

    if let Some(param_name) = names.iter().find(|name| name.contains(',')) {
        return Err(ModelBuildError::CommaInParameterNameNotAllowed {
            param_name: param_name.clone(),
        });
    }

    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ModelBuildError::EmptyParameterName);
    }

    let unique: HashSet<&String> = names.iter().collect();
    if unique.len() != names.len() {
        return Err(ModelBuildError::DuplicateParameterNames {
            function_parameters: names,
        });
    }
    Ok(names)
}
