// Health module: liveness and readiness checks

pub mod controllers;
