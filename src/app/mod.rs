// dalifetch - app/mod.rs
//
// Application layer: run orchestration and the HTTP collaborators.
// Dependencies: core layer.

pub mod fetch;
pub mod run;
