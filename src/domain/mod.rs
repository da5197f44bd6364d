// Domain layer module exports
// Pure roster logic, independent of the HTTP surface

pub mod roster;
