pub mod assistant;
pub mod contacts;
pub mod dashboard;
pub mod emergency;
pub mod travel;
