use thiserror::Error as ThisError;

/// An error structure that contains error variants that occur when building a model.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ModelBuildError {
    /// Model parameters contain duplicates
    #[error("Parameter list {:?} contains duplicates! Parameter lists must comprise only unique elements.", function_parameters)]
    DuplicateParameterNames {
        /// the given parameter list containing duplicates
        function_parameters: Vec<String>,
    },

    /// The model parameter list is empty.
    #[error("The model parameter list is empty! It must at least contain one parameter.")]
    EmptyParameters,

    /// A parameter name is empty or consists only of whitespace.
    #[error("Parameter names must not be empty or consist only of whitespace.")]
    EmptyParameterName,

    /// This error indicates that more or fewer parameter names were provided than the model
    /// function takes parameter arguments.
    #[error(
        "Incorrect parameter count: Given parameter names '{:?}' have length {}, but the provided function takes {} parameter arguments.",
        params,
        string_params_count,
        function_argument_count,
    )]
    IncorrectParameterCount {
        /// the parameter names that were given
        params: Vec<String>,
        /// the number of parameters provided through the string api
        string_params_count: usize,
        /// the number of arguments this function actually takes
        function_argument_count: usize,
    },

    /// Parameter names may not contain a comma separator, because this is most likely caused by a typo, i.e.
    /// `["tau,phi"]`, instead of actually `["tau","phi"]`.
    #[error("Parameter names may not contain comma separator: '{}'. Did you want to give two parameters?", param_name)]
    CommaInParameterNameNotAllowed {
        /// the parameter name
        param_name: String,
    },
}

/// Errors that occur when evaluating a model.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ModelError {
    /// the number of given parameter values does not match the number of model parameters
    #[error(
        "Model has {} parameters, but {} parameter values were provided.",
        expected,
        actual
    )]
    IncorrectParameterCount {
        /// the number of model parameters
        expected: usize,
        /// the number of given values
        actual: usize,
    },
}
