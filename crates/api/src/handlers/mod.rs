//! Request handlers for the REST surface.
//!
//! Handlers delegate to the services in [`crate::service`] and map errors
//! via [`crate::error::AppError`].

pub mod film;
