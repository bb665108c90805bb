use orderflow_core::Priority;

/// Amount above which an order is high priority
pub const DEFAULT_HIGH_PRIORITY_THRESHOLD: f64 = 200.0;

/// Maps an order amount to a priority tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityRule {
    threshold: f64,
}

impl PriorityRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Strictly above the threshold is high; everything else, negatives included, is low
    pub fn calculate(&self, amount: f64) -> Priority {
        if amount > self.threshold {
            Priority::High
        } else {
            Priority::Low
        }
    }
}

impl Default for PriorityRule {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_PRIORITY_THRESHOLD)
    }
}
