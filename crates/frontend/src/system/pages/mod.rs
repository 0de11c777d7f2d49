pub mod access_denied;
pub mod login;
pub mod not_found;
