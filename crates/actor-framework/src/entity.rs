//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type implements to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the associated types for ids,
//! creation payloads, actions, context and errors, and provides the lifecycle hooks the actor
//! calls while it owns the collection.
//!
//! # Hooks
//!
//! Besides the per-entity hooks (`on_create`, `on_delete`, `handle_action`) there are two
//! collection-level hooks:
//! - [`ActorEntity::load`] builds the initial collection when the actor starts (and on reload).
//! - [`ActorEntity::on_commit`] runs after every request that changed the collection. This is
//!   where an entity writes its backing storage.
//!
//! Only `next_id`, `id`, `from_create_params` and `handle_action` are required. The rest default
//! to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// A mutation the actor has just applied to its collection.
///
/// Passed to [`ActorEntity::on_commit`] so the entity can decide what to persist.
#[derive(Debug)]
pub enum Change<'a, T: ActorEntity> {
    /// A new entity was appended.
    Created(&'a T::Id),
    /// A delete request was processed. `removed` is false when the id was absent.
    Deleted { id: &'a T::Id, removed: bool },
    /// A custom action succeeded.
    Action {
        id: &'a T::Id,
        result: &'a T::ActionResult,
    },
}

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can do async work (file I/O, talking to other actors).
/// The `Context` type is handed to `run()` and passed to every hook, which allows late binding of
/// dependencies such as file locations or a client for reporting problems.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. adjusting stock).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. Clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Picks the id for the next entity, given the current collection in insertion order.
    ///
    /// Must return an id that no entity in `store` carries.
    fn next_id(store: &[Self], ctx: &Self::Context) -> Self::Id;

    /// Construct the full entity from the allocated id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Collection Hooks (Async) ---

    /// Builds the collection the actor starts with.
    async fn load(_ctx: &Self::Context) -> Vec<Self> {
        Vec::new()
    }

    /// Called after a request changed the collection.
    async fn on_commit(_store: &[Self], _change: Change<'_, Self>, _ctx: &Self::Context) {}

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the collection.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
