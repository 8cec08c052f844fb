//! Score aggregation.
//!
//! Reduces each group's scores to a rounded mean, then finds the group(s)
//! holding the highest and lowest mean. Ties keep every tied key.

pub mod aggregate;
pub mod extremes;
pub mod types;
pub mod utility;
