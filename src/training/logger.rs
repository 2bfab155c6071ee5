//! Verbosity-gated training logs.
//!
//! [`TrainingLogger`] decides *whether* an event is reported; the events
//! themselves go through `tracing`, so the binary (or a test harness) picks
//! where they end up.

use tracing::{debug, info, warn};

use super::cost::DivergenceError;

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Only abnormal terminations (divergence, iteration cap).
    #[default]
    Warning,
    /// Start, convergence and final summary.
    Info,
    /// Periodic per-iteration progress.
    Debug,
}

/// Structured logger used by the optimizers.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    log_interval: usize,
}

impl TrainingLogger {
    /// Create a logger. Progress is reported every `log_interval` iterations
    /// at [`Verbosity::Debug`]; an interval of 0 disables progress lines.
    pub fn new(verbosity: Verbosity, log_interval: usize) -> Self {
        Self {
            verbosity,
            log_interval,
        }
    }

    /// Current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    pub fn start_gradient_descent(
        &self,
        n_weights: usize,
        learning_rate: f64,
        max_iterations: usize,
        threshold: f64,
    ) {
        if self.enabled(Verbosity::Info) {
            info!(
                n_weights,
                learning_rate,
                max_iterations,
                threshold,
                "starting gradient descent"
            );
        }
    }

    pub fn log_progress(&self, iteration: usize, cost: f64) {
        if self.enabled(Verbosity::Debug)
            && self.log_interval > 0
            && iteration % self.log_interval == 0
        {
            debug!(iteration, cost, "gradient descent progress");
        }
    }

    pub fn log_converged(&self, iteration: usize, cost: f64) {
        if self.enabled(Verbosity::Info) {
            info!(iteration, cost, "gradient descent converged");
        }
    }

    pub fn log_iteration_limit(&self, max_iterations: usize, cost: f64) {
        if self.enabled(Verbosity::Warning) {
            warn!(
                max_iterations,
                cost, "iteration cap reached before convergence; keeping best-effort weights"
            );
        }
    }

    pub fn log_divergence(&self, iteration: usize, learning_rate: f64, error: &DivergenceError) {
        if self.enabled(Verbosity::Warning) {
            warn!(iteration, learning_rate, %error, "gradient descent diverged");
        }
    }

    pub fn log_normal_equation(&self, n_weights: usize, n_samples: usize) {
        if self.enabled(Verbosity::Info) {
            info!(n_weights, n_samples, "solved normal equation");
        }
    }
}

impl Default for TrainingLogger {
    fn default() -> Self {
        Self::new(Verbosity::default(), 1000)
    }
}
