pub mod api;
pub mod outcome;
