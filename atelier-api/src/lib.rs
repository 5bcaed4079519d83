//! atelier-api: async client for the shop's JSON backend.
//!
//! The backend is a generic key-value JSON store exposing one collection per
//! record type. All network access in the workspace goes through here; the
//! engine in atelier-core never does I/O.

pub mod client;

pub use client::ShopApi;
