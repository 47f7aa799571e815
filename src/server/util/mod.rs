pub mod body;
pub mod validate;
