//! Generic cursor checks shared by the test suites of every crate in the
//! workspace. Each function takes the cursor (or a factory for it) under test
//! and panics on a violated contract.

pub mod cursor_contract_tests;
