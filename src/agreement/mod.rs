use thiserror::Error as ThisError;


/// Errors when calculating the agreement between an experimental and a
/// theoretical value.
#[derive(Debug, Clone, Copy, PartialEq, ThisError)]
pub enum AgreementError {
    /// the theoretical reference value is zero or not finite
    #[error("The theoretical value must be finite and nonzero, but is {}.", theoretical)]
    ZeroReference {
        /// the given reference value
        theoretical: f64,
    },
}

/// The agreement of an experimental value with a theoretical reference value
/// ```math
/// 1 - \frac{|t - e|}{t},
/// ```
/// where `$e$` is the experimental and `$t$` the theoretical value.
/// Perfect agreement gives `1`. Note that the denominator is the signed reference value.
///
/// # Example
/// ```rust
/// # use fitting::agreement::conc;
/// assert_eq!(conc(5., 10.).unwrap(), 0.5);
/// assert_eq!(conc(3., 3.).unwrap(), 1.);
/// assert!(conc(1., 0.).is_err());
/// ```
pub fn conc(experimental: f64, theoretical: f64) -> Result<f64, AgreementError> {
    if theoretical == 0. || !theoretical.is_finite() {
        return Err(AgreementError::ZeroReference { theoretical });
    }
    Ok(1. - (theoretical - experimental).abs() / theoretical)
}
