use fitting::model::Model;

/// a straight line `a*x+b`
pub fn line(x: f64, a: f64, b: f64) -> f64 {
    a * x + b
}

/// the model for [line] with parameters `["a","b"]`
pub fn line_model() -> Model {
    Model::new(&["a", "b"], line)
        .expect("line model must be valid")
        .named("line")
}

/// exponential decay with a constant offset `amplitude*exp(-t/tau)+offset`
pub fn exponential_decay_with_offset(t: f64, amplitude: f64, tau: f64, offset: f64) -> f64 {
    amplitude * (-t / tau).exp() + offset
}

/// the model for [exponential_decay_with_offset] with parameters `["amplitude","tau","offset"]`
pub fn exponential_decay_model() -> Model {
    Model::new(
        &["amplitude", "tau", "offset"],
        exponential_decay_with_offset,
    )
    .expect("exponential decay model must be valid")
    .named("exponential decay")
}

/// a gaussian peak `amplitude*exp(-(x-center)^2/(2*sigma^2))`
pub fn gaussian(x: f64, amplitude: f64, center: f64, sigma: f64) -> f64 {
    amplitude * (-(x - center).powi(2) / (2. * sigma * sigma)).exp()
}

/// the model for [gaussian] with parameters `["amplitude","center","sigma"]`
pub fn gaussian_model() -> Model {
    Model::new(&["amplitude", "center", "sigma"], gaussian)
        .expect("gaussian model must be valid")
        .named("gaussian")
}

/// double exponential decay with constant offset
/// `c1*exp(-t/tau1)+c2*exp(-t/tau2)+offset`
pub fn double_exponential_with_offset(
    t: f64,
    tau1: f64,
    tau2: f64,
    c1: f64,
    c2: f64,
    offset: f64,
) -> f64 {
    c1 * (-t / tau1).exp() + c2 * (-t / tau2).exp() + offset
}

/// the model for [double_exponential_with_offset] with parameters
/// `["tau1","tau2","c1","c2","offset"]`
pub fn double_exponential_model() -> Model {
    Model::new(
        &["tau1", "tau2", "c1", "c2", "offset"],
        double_exponential_with_offset,
    )
    .expect("double exponential model must be valid")
    .named("double exponential")
}
