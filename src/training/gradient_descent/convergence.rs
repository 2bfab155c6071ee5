//! Convergence detection for gradient descent.
//!
//! Tracks the cost of the previous iteration and signals convergence once two
//! consecutive costs differ by no more than a threshold.

/// Result of feeding a new cost into the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceAction {
    /// Cost still changing by more than the threshold.
    Continue,
    /// Cost change fell within the threshold.
    Converged,
}

/// Cost-change convergence monitor.
///
/// # Example
///
/// ```
/// use regfit::training::{ConvergenceAction, ConvergenceMonitor};
///
/// let mut monitor = ConvergenceMonitor::new(1e-3);
///
/// assert_eq!(monitor.update(2.0), ConvergenceAction::Continue);
/// assert_eq!(monitor.update(1.5), ConvergenceAction::Continue);
/// assert_eq!(monitor.update(1.4995), ConvergenceAction::Converged);
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    /// Largest cost change still considered converged.
    threshold: f64,
    /// Cost at the previous update; `+inf` before the first one.
    previous_cost: f64,
    /// Number of costs observed.
    updates: usize,
}

impl ConvergenceMonitor {
    /// Create a monitor with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            previous_cost: f64::INFINITY,
            updates: 0,
        }
    }

    /// Feed the cost after an update.
    ///
    /// The stored previous cost is only replaced while not converged, so the
    /// comparison always uses the last cost that still changed significantly.
    pub fn update(&mut self, cost: f64) -> ConvergenceAction {
        self.updates += 1;
        if (self.previous_cost - cost).abs() <= self.threshold {
            ConvergenceAction::Converged
        } else {
            self.previous_cost = cost;
            ConvergenceAction::Continue
        }
    }

    /// Convergence threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last cost that changed significantly, `+inf` if none yet.
    pub fn previous_cost(&self) -> f64 {
        self.previous_cost
    }

    /// Number of costs observed.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Forget all observed costs.
    pub fn reset(&mut self) {
        self.previous_cost = f64::INFINITY;
        self.updates = 0;
    }
}
