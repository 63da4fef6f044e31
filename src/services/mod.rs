pub mod resolver_service;
pub mod curve_service;
pub mod chart_service;
pub mod preset_service;
