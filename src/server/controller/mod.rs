//! HTTP request handlers.
//!
//! Each handler parses the route and body, maps the DTO into a parameter model, makes a
//! single repository call through the trait objects held in `AppState` and maps the
//! result back into a DTO. Repository failures are converted into `AppError` here so the
//! client-facing diagnostic can name the record involved.

pub mod address;
pub mod student;

#[cfg(test)]
mod test;
