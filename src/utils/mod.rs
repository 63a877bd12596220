pub mod analytics;
pub mod api;
pub mod dom;
pub mod storage;
pub mod validation;
