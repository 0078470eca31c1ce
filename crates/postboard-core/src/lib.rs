//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate contains the post/picture data-access services and the ports
//! they depend on, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
