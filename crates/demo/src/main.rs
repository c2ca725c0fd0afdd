//! Solves `x³ − x − 2 = 0` with four root-finding methods and shows how each
//! one converged.
//!
//! By default every method runs in turn and opens a plot window of its
//! iterates over the curve; the next method starts once the window is closed.
//! Set `RUST_LOG=debug` to log every iteration.

mod method;

use clap::Parser;
use eyre::eyre;
use rootfind_core::Cubic;
use rootfind_observers::{ConvergencePlot, LogObserver, trace_points};
use rootfind_solvers::Solution;

use crate::method::Method;

#[derive(Debug, Parser)]
#[command(version, about = "Compare root-finding methods on x³ − x − 2")]
struct Cli {
    /// Method to run. Repeat to run several; all four run when omitted.
    #[arg(long = "method", value_enum)]
    methods: Vec<Method>,

    /// Print each trace as `x, f(x)` lines instead of opening plot windows.
    #[arg(long)]
    no_plot: bool,
}

impl Cli {
    fn methods(&self) -> Vec<Method> {
        if self.methods.is_empty() {
            Method::ALL.to_vec()
        } else {
            self.methods.clone()
        }
    }
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    for method in cli.methods() {
        let mut observer = LogObserver::new(method.label());
        let solution = method.solve(&mut observer)?;

        log::info!("{}", summary(&observer, &solution));

        let label = observer.label();
        if cli.no_plot {
            print_trace(label, &solution);
        } else {
            ConvergencePlot::new(label, method.color())
                .show(&Cubic, &solution.trace)
                .map_err(|err| eyre!("failed to open the {label} plot: {err}"))?;
        }
    }

    Ok(())
}

/// One line describing how a method finished, tagged with the observer's label.
fn summary(observer: &LogObserver, solution: &Solution) -> String {
    format!(
        "{}: {} after {} iterations, x = {}, f(x) = {:e}",
        observer.label(),
        solution.status,
        solution.iters,
        solution.x,
        solution.residual,
    )
}

fn print_trace(label: &str, solution: &Solution) {
    println!("# {label} Method");
    for [x, fx] in trace_points(&Cubic, &solution.trace) {
        println!("{x}, {fx}");
    }
}
