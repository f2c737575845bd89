use std::collections::HashMap;
use std::fmt;
use thiserror::Error as ThisError;


/// Errors when creating or addressing parameters by name.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParameterError {
    /// a parameter name was given that is not part of the model
    #[error("Parameter '{}' is not part of the model parameters.", name)]
    UnknownParameter {
        /// the offending name
        name: String,
    },
    /// no initial guess was given for a model parameter
    #[error("No initial guess was provided for parameter '{}'.", name)]
    MissingInitialGuess {
        /// the parameter without a guess
        name: String,
    },
    /// more than one initial guess was given for the same parameter
    #[error("Initial guess for parameter '{}' was provided more than once.", name)]
    DuplicateInitialGuess {
        /// the parameter with more than one guess
        name: String,
    },
}

/// A single named model parameter.
///
/// Before a fit, the value is the initial guess. After a fit, the value is
/// the best fit value and the standard error is available (if it could be calculated).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    value: f64,
    init_value: f64,
    stderr: Option<f64>,
    vary: bool,
}

impl Parameter {
    pub(crate) fn new(name: String, init_value: f64) -> Self {
        Self {
            name,
            value: init_value,
            init_value,
            stderr: None,
            vary: true,
        }
    }

    /// the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// the value this parameter had when the fit was started
    pub fn init_value(&self) -> f64 {
        self.init_value
    }

    /// The estimated standard error of the value. None before a fit, for fixed
    /// parameters, and when the covariance matrix could not be calculated.
    pub fn stderr(&self) -> Option<f64> {
        self.stderr
    }

    /// the standard error relative to the absolute value
    pub fn relative_error(&self) -> Option<f64> {
        self.stderr
            .filter(|_| self.value != 0.)
            .map(|stderr| stderr / self.value.abs())
    }

    /// whether the parameter is varied during the fit. If not, it keeps its initial value.
    pub fn vary(&self) -> bool {
        self.vary
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)?;
        match self.stderr {
            Some(stderr) => write!(f, " +/- {}", stderr),
            None if !self.vary => write!(f, " (fixed)"),
            None => Ok(()),
        }
    }
}

/// An ordered collection of the named parameters of a model. The order is the
/// order of the parameter names at model creation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameters {
    params: Vec<Parameter>,
}

impl Parameters {
    /// create the parameters for the given names from a mapping of names to initial
    /// guesses. Each name requires exactly one guess and every guess must belong to a name.
    pub(crate) fn from_guesses<I, S>(names: &[String], guesses: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut initial_values = HashMap::<&str, f64>::with_capacity(names.len());
        for (name, guess) in guesses {
            let name = name.as_ref();
            let Some(known_name) = names.iter().find(|known| known.as_str() == name) else {
                return Err(ParameterError::UnknownParameter {
                    name: name.to_string(),
                });
            };
            if initial_values.insert(known_name.as_str(), guess).is_some() {
                return Err(ParameterError::DuplicateInitialGuess {
                    name: name.to_string(),
                });
            }
        }

        let params = names
            .iter()
            .map(|name| {
                initial_values
                    .get(name.as_str())
                    .map(|&guess| Parameter::new(name.clone(), guess))
                    .ok_or_else(|| ParameterError::MissingInitialGuess { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { params })
    }

    /// the number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// true if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// get a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|param| param.name == name)
    }

    /// get the value of a parameter by name
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(Parameter::value)
    }

    /// iterate over the parameters in order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    /// the parameter names in order
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(Parameter::name).collect()
    }

    /// the parameter values in order
    pub fn values(&self) -> Vec<f64> {
        self.params.iter().map(Parameter::value).collect()
    }

    /// the parameter values as a map from name to value
    pub fn valuesdict(&self) -> HashMap<String, f64> {
        self.params
            .iter()
            .map(|param| (param.name.clone(), param.value))
            .collect()
    }

    /// Fix a parameter at its current value (`vary = false`) or let the fit vary it again.
    pub fn set_vary(&mut self, name: &str, vary: bool) -> Result<(), ParameterError> {
        let param = self.get_mut(name)?;
        param.vary = vary;
        Ok(())
    }

    /// Set the value of a parameter. This also becomes its initial value.
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        let param = self.get_mut(name)?;
        param.value = value;
        param.init_value = value;
        param.stderr = None;
        Ok(())
    }

    /// the indices of the parameters that are varied in the fit
    pub(crate) fn varied_indices(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter_map(|(idx, param)| param.vary.then_some(idx))
            .collect()
    }

    /// set the values at the given indices, leaving the others untouched
    pub(crate) fn set_values_at(&mut self, indices: &[usize], values: &[f64]) {
        debug_assert_eq!(indices.len(), values.len());
        for (&idx, &value) in indices.iter().zip(values) {
            self.params[idx].value = value;
        }
    }

    /// set the standard errors of the parameters at the given indices. All other
    /// parameters have no standard error afterwards.
    pub(crate) fn set_stderrs_at(&mut self, indices: &[usize], stderrs: Option<&[f64]>) {
        self.params.iter_mut().for_each(|param| param.stderr = None);
        if let Some(stderrs) = stderrs {
            debug_assert_eq!(indices.len(), stderrs.len());
            for (&idx, &stderr) in indices.iter().zip(stderrs) {
                self.params[idx].stderr = Some(stderr);
            }
        }
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Parameter, ParameterError> {
        self.params
            .iter_mut()
            .find(|param| param.name == name)
            .ok_or_else(|| ParameterError::UnknownParameter {
                name: name.to_string(),
            })
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.params {
            writeln!(f, "{}", param)?;
        }
        Ok(())
    }
}
