pub mod browse;
pub mod login;
