//! Core domain entities

pub mod quote;
pub mod user;

pub use quote::*;
pub use user::*;
