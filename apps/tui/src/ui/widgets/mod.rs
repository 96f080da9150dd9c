pub mod chart;
pub mod popup;
pub mod selector;
