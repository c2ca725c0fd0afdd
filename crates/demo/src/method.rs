use clap::ValueEnum;
use rootfind_core::Cubic;
use rootfind_observers::{Color32, LogObserver};
use rootfind_solvers::{Solution, bisection, newton, regula_falsi, secant};

/// Starting point for Newton-Raphson.
pub const NEWTON_SEED: f64 = 1.5;

/// Bracket for bisection and false position, and the secant seeds.
pub const INTERVAL: [f64; 2] = [1.0, 2.0];

/// The root-finding methods the demo can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Newton-Raphson from x = 1.5.
    Newton,
    /// Bisection of [1, 2].
    Bisection,
    /// False position (regula falsi) on [1, 2].
    FalsePosition,
    /// Secant from the seeds 1 and 2.
    Secant,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Newton,
        Self::Bisection,
        Self::FalsePosition,
        Self::Secant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Newton => "Newton-Raphson",
            Self::Bisection => "Bisection",
            Self::FalsePosition => "False Position",
            Self::Secant => "Secant",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Newton => Color32::BLUE,
            Self::Bisection => Color32::RED,
            Self::FalsePosition => Color32::GREEN,
            Self::Secant => Color32::from_rgb(128, 0, 128),
        }
    }

    /// Solves the reference cubic from this method's standard starting point.
    ///
    /// Uses the default configuration of each solver: Newton-Raphson stops
    /// after 10 steps, secant after 20, the bracketing methods after 50.
    pub fn solve(self, observer: &mut LogObserver) -> eyre::Result<Solution> {
        let solution = match self {
            Self::Newton => {
                newton::solve(&Cubic, NEWTON_SEED, &newton::Config::default(), observer)?
            }
            Self::Bisection => {
                bisection::solve(&Cubic, INTERVAL, &bisection::Config::default(), observer)?
            }
            Self::FalsePosition => {
                regula_falsi::solve(&Cubic, INTERVAL, &regula_falsi::Config::default(), observer)?
            }
            Self::Secant => secant::solve(&Cubic, INTERVAL, &secant::Config::default(), observer)?,
        };
        Ok(solution)
    }
}
