pub mod current_profile;
pub mod session;
