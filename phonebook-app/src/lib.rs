pub mod config;
pub mod controller;
pub mod prompt;
pub mod store;
pub mod views;

pub use controller::Phonebook;
