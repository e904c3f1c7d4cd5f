//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod catalog_client;

pub use catalog_client::*;
