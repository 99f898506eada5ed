pub mod root;
pub mod user;
