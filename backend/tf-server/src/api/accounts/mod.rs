#[allow(clippy::module_inception)]
pub mod accounts;
pub mod auth_page_response;
pub mod change_password_request;
pub mod check_username_query;
pub mod identity_dto;
pub mod login_request;
pub mod next_query;
pub mod session_response;
pub mod signup_request;
pub mod username_availability_response;
