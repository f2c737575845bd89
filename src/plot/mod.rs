use crate::fit::FitResult;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{Circle, ErrorBar, PathElement};
use plotters::prelude::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, TRANSPARENT, WHITE};
use plotters::style::{Color, RGBColor};
use std::ops::Range;
use std::path::Path;
use thiserror::Error as ThisError;

mod color;
mod options;

pub use options::{ErrorBars, PlotOptions, ScatterOptions, PIXELS_PER_INCH};

use color::parse_color;

/// legend entry of the best fit curve
const FIT_LABEL: &str = "Curve Fitting";
/// number of decimals of the goodness of fit values in the legend
const LEGEND_DECIMALS: i32 = 5;
const LINE_WIDTH: u32 = 2;
const ERROR_BAR_CAP_WIDTH: u32 = 6;
const MARKER_ALPHA: f64 = 0.8;
const FONT: &str = "sans-serif";
const FONT_SIZE_TITLE: i32 = 24;
const FONT_SIZE_AXIS_LABEL: i32 = 16;
const FONT_SIZE_LEGEND: i32 = 14;
/// largest accepted width or height of a figure in pixels
const MAX_FIGURE_PIXELS: f64 = 20_000.;

/// Errors that occur when plotting a fit.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum PlotError {
    /// a color string could not be parsed
    #[error("Unknown color '{}'.", color)]
    UnknownColor {
        /// the given color
        color: String,
    },
    /// the figure size is not positive and finite, or too large to render
    #[error("Invalid figure size {}x{} inches.", width, height)]
    InvalidFigureSize {
        /// given width in inches
        width: f64,
        /// given height in inches
        height: f64,
    },
    /// x and y have different lengths
    #[error(
        "Vectors x and y must have same lengths. Given x length = {} and y length = {}",
        x_length,
        y_length
    )]
    DataLength {
        /// length of x
        x_length: usize,
        /// length of y
        y_length: usize,
    },
    /// there is no data to plot
    #[error("There is no data to plot.")]
    EmptyData,
    /// the number of error bars does not match the number of data points
    #[error(
        "Expected {} error bar values (one per data point), but got {}.",
        expected,
        actual
    )]
    ErrorBarLength {
        /// number of data points
        expected: usize,
        /// number of error bar values
        actual: usize,
    },
    /// an error bar value is negative or not finite
    #[error("Error bar values must be finite and non-negative, but got {}.", value)]
    InvalidErrorBar {
        /// the offending value
        value: f64,
    },
    /// the drawing backend failed
    #[error("Drawing failed: {0}")]
    Backend(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Self::Backend(error.to_string())
    }
}

/// Plot the data as a line together with the best fit curve and write
/// the figure to the given path. The figure is written as SVG if the file extension
/// is `svg` and as a bitmap otherwise, with the format given by the extension.
///
/// The legend contains the data, the best fit and the values of `$R^2$` and `$\chi^2$`
/// of the fit rounded to 5 decimals.
pub fn plot(
    fit_result: &FitResult,
    x: &[f64],
    y: &[f64],
    options: &PlotOptions,
    path: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let figure = Figure::for_line_plot(fit_result, x, y, options)?;
    figure.render(path.as_ref())
}

/// Plot the data as a scatter plot, optionally with error bars, together with the
/// best fit curve and write the figure to the given path. See [plot] for the
/// output format and the legend.
pub fn scatter(
    fit_result: &FitResult,
    x: &[f64],
    y: &[f64],
    options: &ScatterOptions,
    path: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let figure = Figure::for_scatter_plot(fit_result, x, y, options)?;
    figure.render(path.as_ref())
}

/// how the data is drawn
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DataStyle {
    Line {
        color: RGBColor,
    },
    Scatter {
        edgecolor: RGBColor,
        facecolor: RGBColor,
        radius: i32,
        xerr: Option<Vec<f64>>,
        yerr: Option<Vec<f64>>,
    },
}

/// Everything needed to draw a figure, validated and in pixel units where applicable.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Figure {
    pub(crate) pixels: (u32, u32),
    pub(crate) title: Option<String>,
    pub(crate) xlabel: Option<String>,
    pub(crate) ylabel: Option<String>,
    pub(crate) grid: bool,
    pub(crate) x_range: Range<f64>,
    pub(crate) y_range: Range<f64>,
    pub(crate) data: Vec<(f64, f64)>,
    pub(crate) data_label: String,
    pub(crate) data_style: DataStyle,
    pub(crate) fitted: Vec<(f64, f64)>,
    pub(crate) fit_color: RGBColor,
    pub(crate) goodness_of_fit: [String; 2],
}

impl Figure {
    pub(crate) fn for_line_plot(
        fit_result: &FitResult,
        x: &[f64],
        y: &[f64],
        options: &PlotOptions,
    ) -> Result<Self, PlotError> {
        check_data(x, y)?;
        let pixels = figure_pixels(options.figsize)?;
        let color = parse_color(&options.color_data)?;
        let fit_color = parse_color(&options.color_fitting)?;
        let fitted = fitted_curve(fit_result, x);

        Ok(Self {
            pixels,
            title: options.title.clone(),
            xlabel: options.xlabel.clone(),
            ylabel: options.ylabel.clone(),
            grid: options.grid,
            x_range: axis_range(x.iter().copied()),
            y_range: axis_range(y.iter().chain(fitted.iter().map(|(_, y)| y)).copied()),
            data: data_points(x, y),
            data_label: options.data_label.clone(),
            data_style: DataStyle::Line { color },
            fitted,
            fit_color,
            goodness_of_fit: goodness_of_fit_labels(fit_result.rsquared(), fit_result.chisqr()),
        })
    }

    pub(crate) fn for_scatter_plot(
        fit_result: &FitResult,
        x: &[f64],
        y: &[f64],
        options: &ScatterOptions,
    ) -> Result<Self, PlotError> {
        check_data(x, y)?;
        let pixels = figure_pixels(options.figsize)?;
        let edgecolor = parse_color(&options.edgecolor_data)?;
        let facecolor = parse_color(&options.facecolor_data)?;
        let fit_color = parse_color(&options.color_fitting)?;
        let xerr = options
            .xerr
            .as_ref()
            .map(|bars| error_bar_values(bars, x.len()))
            .transpose()?;
        let yerr = options
            .yerr
            .as_ref()
            .map(|bars| error_bar_values(bars, y.len()))
            .transpose()?;
        let fitted = fitted_curve(fit_result, x);

        let x_extent = with_error_bars(x, xerr.as_deref());
        let y_extent = with_error_bars(y, yerr.as_deref())
            .into_iter()
            .chain(fitted.iter().map(|&(_, y)| y));

        Ok(Self {
            pixels,
            title: options.title.clone(),
            xlabel: options.xlabel.clone(),
            ylabel: options.ylabel.clone(),
            grid: options.grid,
            x_range: axis_range(x_extent.into_iter()),
            y_range: axis_range(y_extent),
            data: data_points(x, y),
            data_label: options.data_label.clone(),
            data_style: DataStyle::Scatter {
                edgecolor,
                facecolor,
                radius: marker_radius(options.marker_size),
                xerr,
                yerr,
            },
            fitted,
            fit_color,
            goodness_of_fit: goodness_of_fit_labels(fit_result.rsquared(), fit_result.chisqr()),
        })
    }

    /// write the figure to the path using the backend given by the file extension
    fn render(&self, path: &Path) -> Result<(), PlotError> {
        let is_svg = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("svg"));
        if is_svg {
            self.draw(SVGBackend::new(path, self.pixels).into_drawing_area())
        } else {
            self.draw(BitMapBackend::new(path, self.pixels).into_drawing_area())
        }
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(15).x_label_area_size(50).y_label_area_size(60);
        if let Some(title) = &self.title {
            builder.caption(title, (FONT, FONT_SIZE_TITLE));
        }
        let mut chart = builder.build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        let mut mesh = chart.configure_mesh();
        mesh.label_style((FONT, FONT_SIZE_AXIS_LABEL));
        if !self.grid {
            mesh.disable_mesh();
        }
        if let Some(xlabel) = &self.xlabel {
            mesh.x_desc(xlabel);
        }
        if let Some(ylabel) = &self.ylabel {
            mesh.y_desc(ylabel);
        }
        mesh.draw()?;

        match &self.data_style {
            DataStyle::Line { color } => {
                let color = *color;
                chart
                    .draw_series(LineSeries::new(
                        self.data.iter().copied(),
                        color.stroke_width(LINE_WIDTH),
                    ))?
                    .label(self.data_label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
                    });
            }
            DataStyle::Scatter {
                edgecolor,
                facecolor,
                radius,
                xerr,
                yerr,
            } => {
                let (edgecolor, facecolor, radius) = (*edgecolor, *facecolor, *radius);
                if let Some(yerr) = yerr {
                    chart.draw_series(self.data.iter().zip(yerr).map(|(&(x, y), &err)| {
                        ErrorBar::new_vertical(
                            x,
                            y - err,
                            y,
                            y + err,
                            BLACK.stroke_width(1),
                            ERROR_BAR_CAP_WIDTH,
                        )
                    }))?;
                }
                if let Some(xerr) = xerr {
                    chart.draw_series(self.data.iter().zip(xerr).map(|(&(x, y), &err)| {
                        ErrorBar::new_horizontal(
                            y,
                            x - err,
                            x,
                            x + err,
                            BLACK.stroke_width(1),
                            ERROR_BAR_CAP_WIDTH,
                        )
                    }))?;
                }
                chart
                    .draw_series(self.data.iter().map(|&point| {
                        Circle::new(point, radius, facecolor.mix(MARKER_ALPHA).filled())
                    }))?
                    .label(self.data_label.as_str())
                    .legend(move |(x, y)| {
                        Circle::new((x + 10, y), radius, facecolor.mix(MARKER_ALPHA).filled())
                    });
                chart.draw_series(
                    self.data
                        .iter()
                        .map(|&point| Circle::new(point, radius, edgecolor.stroke_width(1))),
                )?;
            }
        }

        let fit_color = self.fit_color;
        chart
            .draw_series(LineSeries::new(
                self.fitted.iter().copied(),
                fit_color.stroke_width(LINE_WIDTH),
            ))?
            .label(FIT_LABEL)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], fit_color.stroke_width(LINE_WIDTH))
            });

        // text only legend entries
        let anchor = (self.x_range.start, self.y_range.start);
        for text in &self.goodness_of_fit {
            chart
                .draw_series(std::iter::once(Circle::new(anchor, 0, TRANSPARENT.filled())))?
                .label(text.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y)], TRANSPARENT));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, FONT_SIZE_LEGEND))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

fn check_data(x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if x.len() != y.len() {
        return Err(PlotError::DataLength {
            x_length: x.len(),
            y_length: y.len(),
        });
    }
    if x.is_empty() {
        return Err(PlotError::EmptyData);
    }
    Ok(())
}

fn data_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

/// the best fit evaluated at the given locations, in the order of the locations
fn fitted_curve(fit_result: &FitResult, x: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .copied()
        .zip(fit_result.eval(x).iter().copied())
        .collect()
}

/// The legend entries `R² = ...` and `Chi² = ...`.
pub(crate) fn goodness_of_fit_labels(rsquared: f64, chisqr: f64) -> [String; 2] {
    [
        format!("R\u{b2} = {}", format_rounded(rsquared, LEGEND_DECIMALS)),
        format!("Chi\u{b2} = {}", format_rounded(chisqr, LEGEND_DECIMALS)),
    ]
}

/// Round to the given number of decimals and print the shortest representation
/// of the result, which always contains a decimal point, e.g. `1.0`, `0.5` or `0.12346`.
pub fn format_rounded(value: f64, decimals: i32) -> String {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    format!("{:?}", rounded)
}

/// the figure size in pixels
pub(crate) fn figure_pixels((width, height): (f64, f64)) -> Result<(u32, u32), PlotError> {
    let pixels = |inches: f64| (inches * PIXELS_PER_INCH).round();
    let valid = |inches: f64| {
        inches.is_finite() && pixels(inches) >= 1. && pixels(inches) <= MAX_FIGURE_PIXELS
    };
    if !(valid(width) && valid(height)) {
        return Err(PlotError::InvalidFigureSize { width, height });
    }
    Ok((pixels(width) as u32, pixels(height) as u32))
}

/// The marker radius in pixels for a marker area given in square points.
pub(crate) fn marker_radius(size: f64) -> i32 {
    let diameter_in_points = size.max(0.).sqrt();
    (diameter_in_points / 72. * PIXELS_PER_INCH / 2.).round() as i32
}

/// the range covering all finite values with a margin of 5% on each side
pub(crate) fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if min > max {
        return 0.0..1.0;
    }
    let range = max - min;
    let padding = if range < 1e-12 { 0.5 } else { range * 0.05 };
    (min - padding)..(max + padding)
}

/// one error bar value per data point
pub(crate) fn error_bar_values(bars: &ErrorBars, len: usize) -> Result<Vec<f64>, PlotError> {
    let values = match bars {
        ErrorBars::Uniform(value) => vec![*value; len],
        ErrorBars::PerPoint(values) => {
            if values.len() != len {
                return Err(PlotError::ErrorBarLength {
                    expected: len,
                    actual: values.len(),
                });
            }
            values.clone()
        }
    };
    if let Some(&value) = values.iter().find(|value| !(value.is_finite() && **value >= 0.)) {
        return Err(PlotError::InvalidErrorBar { value });
    }
    Ok(values)
}

/// all values extended by their error bars, if any
fn with_error_bars(values: &[f64], errors: Option<&[f64]>) -> Vec<f64> {
    match errors {
        None => values.to_vec(),
        Some(errors) => values
            .iter()
            .zip(errors)
            .flat_map(|(value, error)| [value - error, value + error])
            .collect(),
    }
}
