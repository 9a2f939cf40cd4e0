pub mod entities;
pub mod listing;
pub mod use_cases;
