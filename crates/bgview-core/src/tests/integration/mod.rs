pub mod common;
pub mod scenario_tests;
