pub mod date_utils;
pub mod orders;
pub mod profile_api;
pub mod radio;
