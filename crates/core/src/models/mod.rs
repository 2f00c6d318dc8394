pub mod category;
pub mod chart;
pub mod surface;
pub mod trip;
