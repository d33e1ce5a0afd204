//! CLI command implementations

pub mod admin;
pub mod completions;
pub mod config;
pub mod hero;
pub mod home;
pub mod init;
pub mod inquiry;
pub mod preorder;
pub mod store;
pub mod testimonial;
pub mod validate;
pub mod vehicle;
