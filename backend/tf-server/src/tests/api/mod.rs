mod error;
mod session;
mod validation;
