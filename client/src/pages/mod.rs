//! Page components, one per route.

pub mod admin;
pub mod home;
pub mod login;
pub mod projects;
pub mod resume;
pub mod videos;
