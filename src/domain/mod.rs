// Domain layer: core models, ports (interfaces) and pure classification rules.

pub mod model;
pub mod ports;

pub mod services;
