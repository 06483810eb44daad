//! Command handlers. Each returns whether the run passed; `main` maps a
//! failed run to exit status 1.

pub mod check;
pub mod lab;
pub mod rubric;
pub mod util;
