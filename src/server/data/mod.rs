//! Database repository layer for students and addresses.
//!
//! Each repository is a trait so request handlers receive it as a trait object through
//! `AppState`, with a SeaORM-backed implementation used in production. Repositories use
//! SeaORM entity models internally and return domain models, keeping entity types out of
//! the controller layer. Failures are reported as `RepositoryError`.

pub mod address;
pub mod student;

#[cfg(test)]
mod test;
