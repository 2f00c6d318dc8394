pub mod aggregation_service;
pub mod chart_service;
pub mod format_service;
