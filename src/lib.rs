pub mod cli;
pub mod config;
pub mod domain;
pub mod forms;
pub mod repository;
pub mod services;

/// Landing page for logged-in users.
pub const HOME_PATH: &str = "/homepage";
/// Page shown to anonymous users.
pub const LOGIN_PATH: &str = "/login_page";
/// Page listing the wishlisted products.
pub const WISHLIST_PATH: &str = "/wishlist";
