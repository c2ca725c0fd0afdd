//! Native plot window showing a solver trace against its function.
//!
//! See [`ConvergencePlot`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};
use rootfind_core::Function;

use crate::points::{DEFAULT_DOMAIN, DEFAULT_SAMPLES, curve_points, trace_points};

pub use egui::Color32;

/// Renders one solver's iterates on top of the function it was solving.
///
/// Construct with [`ConvergencePlot::new`], optionally adjust the sampled
/// curve with [`domain`](ConvergencePlot::domain) and
/// [`samples`](ConvergencePlot::samples), then call
/// [`show`](ConvergencePlot::show).
///
/// The window contains:
///
/// - the curve `f(x)` sampled across the domain
/// - a horizontal line at `y = 0`
/// - the iterates as points in the method colour, joined in order by a
///   dashed line of the same colour
///
/// It is titled `"<label> Method"` and has a legend and a grid.
///
/// # Example
///
/// ```ignore
/// let solution = bisection::solve_unobserved(&Cubic, [1.0, 2.0], &config)?;
/// ConvergencePlot::new("Bisection", Color32::RED).show(&Cubic, &solution.trace)?;
/// ```
#[derive(Debug, Clone)]
pub struct ConvergencePlot {
    label: String,
    color: Color32,
    domain: [f64; 2],
    samples: usize,
}

impl ConvergencePlot {
    /// Creates a plot for the method `label`, drawing its iterates in `color`.
    ///
    /// The curve defaults to 400 samples over `[-3, 3]`.
    pub fn new(label: impl Into<String>, color: Color32) -> Self {
        Self {
            label: label.into(),
            color,
            domain: DEFAULT_DOMAIN,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Sets the interval the curve is sampled over.
    #[must_use]
    pub fn domain(mut self, start: f64, end: f64) -> Self {
        self.domain = [start, end];
        self
    }

    /// Sets the number of curve samples.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Returns the window title, `"<label> Method"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Method", self.label)
    }

    /// Opens a blocking egui window showing `trace` on top of `function`.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, function: &impl Function, trace: &[f64]) -> Result<(), eframe::Error> {
        let title = self.title();
        let app = PlotApp {
            title: title.clone(),
            label: self.label,
            color: self.color,
            curve: curve_points(function, self.domain, self.samples),
            iterates: trace_points(function, trace),
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

/// The egui [`eframe::App`] that renders one convergence plot.
struct PlotApp {
    title: String,
    label: String,
    color: Color32,
    curve: Vec<[f64; 2]>,
    iterates: Vec<[f64; 2]>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);

            Plot::new("convergence_plot")
                .legend(Legend::default())
                .x_axis_label("x")
                .y_axis_label("f(x)")
                .show_grid(true)
                .show(ui, |plot_ui| {
                    let curve: PlotPoints = self.curve.iter().copied().collect();
                    plot_ui.line(Line::new(curve).name("f(x)"));

                    plot_ui.hline(HLine::new(0.0).color(Color32::BLACK).width(0.5));

                    let iterates: PlotPoints = self.iterates.iter().copied().collect();
                    plot_ui.points(
                        Points::new(iterates)
                            .radius(4.0)
                            .color(self.color)
                            .name(&self.label),
                    );

                    let path: PlotPoints = self.iterates.iter().copied().collect();
                    plot_ui.line(
                        Line::new(path)
                            .color(self.color)
                            .style(LineStyle::dashed_loose()),
                    );
                });
        });
    }
}
