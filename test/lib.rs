//! Table-driven test support: `.test` file parser, runner and diff output.

pub mod test;
pub mod utils;
