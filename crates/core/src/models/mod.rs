pub mod category;
pub mod chart;
pub mod journal;
pub mod seed;
pub mod settings;
pub mod summary;
pub mod transaction;
