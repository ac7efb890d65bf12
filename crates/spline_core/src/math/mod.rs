//! Numeric helpers shared by the evaluation rules.

pub mod taylor;

// Re-export at module level
pub use taylor::taylor_weights;
