pub mod member;
pub mod mentor;
pub mod project;
pub mod rating;
pub mod review;
pub mod storage;
