pub mod admin;
pub mod dashboard;
pub mod home;
pub mod join;
pub mod not_found;
