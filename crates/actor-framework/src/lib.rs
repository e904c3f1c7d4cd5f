//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on Tokio: one task owns a collection of
//! entities, and everything else talks to it through a cloneable, typed client.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Resource-Oriented Architecture**: a uniform set of operations (create, get, list, delete,
//!   custom actions) over a well-defined resource, with a predictable lifecycle.
//! - **Actor Model**: the collection is owned by a single task and mutated only by messages,
//!   processed one at a time. No locks, no shared mutable state.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules, id policy, load and persist hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and the ordered in-memory store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async requests
//!
//! ## Lifecycle
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Product>::new(32);
//!
//! // `run` loads the collection through `ActorEntity::load`, then serves requests
//! let handle = tokio::spawn(actor.run(context));
//!
//! let id = client.create(draft).await?;
//! let snapshot = client.list().await?;
//!
//! // Dropping every client closes the channel and ends the loop
//! drop(client);
//! handle.await?;
//! ```
//!
//! ## Persistence
//!
//! The actor never does I/O itself. After each request that changed the collection it calls
//! [`ActorEntity::on_commit`] with the whole collection and a [`Change`] describing what
//! happened; the entity decides what to write.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers client requests from queued
//! expectations, and raw-receiver helpers for asserting on the exact requests a client sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Change};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
