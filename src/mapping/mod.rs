//! CV-to-section-list mapping

pub mod format;
pub mod icons;
pub mod mapper;

pub use mapper::map_cv_to_sections;
