/// The resolution of rendered figures
pub const PIXELS_PER_INCH: f64 = 100.;

/// Options for a line plot of the data together with the best fit.
///
/// The defaults are: no axis labels and no title, the data labelled `"Data"` and
/// drawn in `"blue"`, the best fit drawn in `"red"`, a figure size of `8x5` inches
/// and no grid.
/// # Example
/// ```rust
/// # use fitting::plot::PlotOptions;
/// let options = PlotOptions::default()
///     .xlabel("time (s)")
///     .ylabel("voltage (V)")
///     .title("Discharge")
///     .grid(true);
/// assert_eq!(options.color_fitting, "red");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// label of the x axis
    pub xlabel: Option<String>,
    /// label of the y axis
    pub ylabel: Option<String>,
    /// title of the figure
    pub title: Option<String>,
    /// legend entry of the data
    pub data_label: String,
    /// color of the data line
    pub color_data: String,
    /// color of the best fit curve
    pub color_fitting: String,
    /// width and height of the figure in inches
    pub figsize: (f64, f64),
    /// whether to draw grid lines
    pub grid: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            xlabel: None,
            ylabel: None,
            title: None,
            data_label: "Data".to_string(),
            color_data: "blue".to_string(),
            color_fitting: "red".to_string(),
            figsize: (8., 5.),
            grid: false,
        }
    }
}

impl PlotOptions {
    /// set the label of the x axis
    pub fn xlabel(self, xlabel: impl Into<String>) -> Self {
        Self {
            xlabel: Some(xlabel.into()),
            ..self
        }
    }

    /// set the label of the y axis
    pub fn ylabel(self, ylabel: impl Into<String>) -> Self {
        Self {
            ylabel: Some(ylabel.into()),
            ..self
        }
    }

    /// set the title
    pub fn title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// set the legend entry of the data
    pub fn data_label(self, data_label: impl Into<String>) -> Self {
        Self {
            data_label: data_label.into(),
            ..self
        }
    }

    /// set the color of the data
    pub fn color_data(self, color: impl Into<String>) -> Self {
        Self {
            color_data: color.into(),
            ..self
        }
    }

    /// set the color of the best fit curve
    pub fn color_fitting(self, color: impl Into<String>) -> Self {
        Self {
            color_fitting: color.into(),
            ..self
        }
    }

    /// set the figure size in inches
    pub fn figsize(self, width: f64, height: f64) -> Self {
        Self {
            figsize: (width, height),
            ..self
        }
    }

    /// enable or disable the grid
    pub fn grid(self, grid: bool) -> Self {
        Self { grid, ..self }
    }
}

/// Error bars for a scatter plot
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBars {
    /// the same error for every data point
    Uniform(f64),
    /// one error per data point
    PerPoint(Vec<f64>),
}

impl From<f64> for ErrorBars {
    fn from(error: f64) -> Self {
        Self::Uniform(error)
    }
}

impl From<Vec<f64>> for ErrorBars {
    fn from(errors: Vec<f64>) -> Self {
        Self::PerPoint(errors)
    }
}

impl From<&[f64]> for ErrorBars {
    fn from(errors: &[f64]) -> Self {
        Self::PerPoint(errors.to_vec())
    }
}

/// Options for a scatter plot of the data together with the best fit.
///
/// The defaults are: no error bars, no axis labels and no title, the data labelled
/// `"Data"` and drawn as circles with a `"cornflowerblue"` face and a `"blue"` edge,
/// a marker size of `50` square points, the best fit drawn in `"red"`, a figure size
/// of `8x5` inches and no grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    /// error bars in x direction
    pub xerr: Option<ErrorBars>,
    /// error bars in y direction
    pub yerr: Option<ErrorBars>,
    /// label of the x axis
    pub xlabel: Option<String>,
    /// label of the y axis
    pub ylabel: Option<String>,
    /// title of the figure
    pub title: Option<String>,
    /// legend entry of the data
    pub data_label: String,
    /// color of the marker edges
    pub edgecolor_data: String,
    /// color of the marker faces
    pub facecolor_data: String,
    /// marker area in square points
    pub marker_size: f64,
    /// color of the best fit curve
    pub color_fitting: String,
    /// width and height of the figure in inches
    pub figsize: (f64, f64),
    /// whether to draw grid lines
    pub grid: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            xerr: None,
            yerr: None,
            xlabel: None,
            ylabel: None,
            title: None,
            data_label: "Data".to_string(),
            edgecolor_data: "blue".to_string(),
            facecolor_data: "cornflowerblue".to_string(),
            marker_size: 50.,
            color_fitting: "red".to_string(),
            figsize: (8., 5.),
            grid: false,
        }
    }
}

impl ScatterOptions {
    /// set the error bars in x direction
    pub fn xerr(self, xerr: impl Into<ErrorBars>) -> Self {
        Self {
            xerr: Some(xerr.into()),
            ..self
        }
    }

    /// set the error bars in y direction
    pub fn yerr(self, yerr: impl Into<ErrorBars>) -> Self {
        Self {
            yerr: Some(yerr.into()),
            ..self
        }
    }

    /// set the label of the x axis
    pub fn xlabel(self, xlabel: impl Into<String>) -> Self {
        Self {
            xlabel: Some(xlabel.into()),
            ..self
        }
    }

    /// set the label of the y axis
    pub fn ylabel(self, ylabel: impl Into<String>) -> Self {
        Self {
            ylabel: Some(ylabel.into()),
            ..self
        }
    }

    /// set the title
    pub fn title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// set the legend entry of the data
    pub fn data_label(self, data_label: impl Into<String>) -> Self {
        Self {
            data_label: data_label.into(),
            ..self
        }
    }

    /// set the edge color of the markers
    pub fn edgecolor_data(self, color: impl Into<String>) -> Self {
        Self {
            edgecolor_data: color.into(),
            ..self
        }
    }

    /// set the face color of the markers
    pub fn facecolor_data(self, color: impl Into<String>) -> Self {
        Self {
            facecolor_data: color.into(),
            ..self
        }
    }

    /// set the marker area in square points
    pub fn marker_size(self, marker_size: f64) -> Self {
        Self {
            marker_size,
            ..self
        }
    }

    /// set the color of the best fit curve
    pub fn color_fitting(self, color: impl Into<String>) -> Self {
        Self {
            color_fitting: color.into(),
            ..self
        }
    }

    /// set the figure size in inches
    pub fn figsize(self, width: f64, height: f64) -> Self {
        Self {
            figsize: (width, height),
            ..self
        }
    }

    /// enable or disable the grid
    pub fn grid(self, grid: bool) -> Self {
        Self { grid, ..self }
    }
}
