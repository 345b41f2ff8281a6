// Domain layer: component view models and the capability traits the helpers are written against.

pub mod model;
pub mod ports;
