//! Heuristic achievement mining over job-description prose

pub mod achievements;
pub mod badge;

pub use achievements::AchievementExtractor;
pub use badge::badge_summary;
