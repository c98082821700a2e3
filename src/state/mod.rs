//! Reactive client state consumed by pages.

pub mod auth;
