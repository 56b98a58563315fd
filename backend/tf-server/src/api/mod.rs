pub mod accounts;
pub mod action_response;
pub mod choice;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod profile;
pub mod projects;
pub mod session;
pub mod tasks;
pub mod toggle_response;
pub mod validation;
