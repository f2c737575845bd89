use fitting::prelude::*;
use shared_test_code::models::line_model;

fn line_fit() -> (Fitting, FitResult) {
    let fitting = Fitting::new(line_model());
    let outcome = fitting
        .fit(&[0., 1., 2., 3.], &[1., 3., 5., 7.], [("a", 1.), ("b", 1.)])
        .expect("fitting must succeed");
    (fitting, outcome)
}

fn read_svg(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).expect("the svg file must be readable")
}

#[test]
fn line_plot_is_written_as_svg_with_legend() {
    let (fitting, outcome) = line_fit();
    let path = std::env::temp_dir().join("fitting_line_plot_test.svg");
    let options = PlotOptions::default()
        .xlabel("x")
        .ylabel("y")
        .title("Line")
        .color_data("crimson")
        .color_fitting("forestgreen")
        .grid(true);
    fitting
        .plot(&outcome, &[0., 1., 2., 3.], &[1., 3., 5., 7.], &options, &path)
        .expect("plotting must succeed");

    let svg = read_svg(&path);
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Data"));
    assert!(svg.contains("Curve Fitting"));
    assert!(svg.contains("R² = 1.0"));
    assert!(svg.contains("Chi² = "));
    assert!(svg.contains("Line"));
}

#[test]
fn scatter_plot_with_error_bars_is_written_as_svg_with_legend() {
    let (fitting, outcome) = line_fit();
    let path = std::env::temp_dir().join("fitting_scatter_plot_test.svg");
    let options = ScatterOptions::default()
        .data_label("Measurement")
        .xerr(0.1)
        .yerr(vec![0.2, 0.3, 0.2, 0.4]);
    fitting
        .scatter(&outcome, &[0., 1., 2., 3.], &[1., 3., 5., 7.], &options, &path)
        .expect("plotting must succeed");

    let svg = read_svg(&path);
    assert!(svg.contains("<circle"));
    assert!(svg.contains("Measurement"));
    assert!(svg.contains("Curve Fitting"));
    assert!(svg.contains("R² = 1.0"));
}

#[test]
fn line_plot_is_written_as_png() {
    let (fitting, outcome) = line_fit();
    let path = std::env::temp_dir().join("fitting_line_plot_test.png");
    fitting
        .plot(
            &outcome,
            &[0., 1., 2., 3.],
            &[1., 3., 5., 7.],
            &PlotOptions::default().figsize(4., 3.),
            &path,
        )
        .expect("plotting must succeed");

    let bytes = std::fs::read(&path).expect("the png file must be readable");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn invalid_plot_options_are_reported_before_rendering() {
    let (fitting, outcome) = line_fit();
    let path = std::env::temp_dir().join("fitting_invalid_plot_test.png");
    let result = fitting.plot(
        &outcome,
        &[0., 1., 2., 3.],
        &[1., 3., 5., 7.],
        &PlotOptions::default().color_data("not a color"),
        &path,
    );
    assert!(matches!(result, Err(PlotError::UnknownColor { .. })));

    let result = fitting.scatter(
        &outcome,
        &[0., 1., 2., 3.],
        &[1., 3., 5., 7.],
        &ScatterOptions::default().yerr(vec![0.1]),
        &path,
    );
    assert!(matches!(
        result,
        Err(PlotError::ErrorBarLength {
            expected: 4,
            actual: 1
        })
    ));
}
