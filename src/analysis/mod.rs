pub mod hero_stats;
pub mod summary;
