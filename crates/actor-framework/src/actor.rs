//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of entities
//! and processes requests against it sequentially.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, Change};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the collection (`store`) and the
/// receiver end of the channel. Requests are handled one at a time inside a single task, so the
/// collection needs no `Mutex`: exclusive ownership inside the task is the synchronization.
///
/// The store is a `Vec` kept in insertion order. Lookups are linear scans by
/// [`ActorEntity::id`], and listings come back in the order entities were created or loaded.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Product>::new(32);
/// let handle = tokio::spawn(actor.run(context));
/// let id = client.create(draft).await?;
/// ```
///
/// # Operations
///
/// * **Startup**: the collection is built by [`ActorEntity::load`] before the first request.
/// * **Create**: asks [`ActorEntity::next_id`] for an id, builds the entity, runs `on_create`,
///   appends it and commits.
/// * **Get / List / NextId**: read-only, never commit.
/// * **Delete**: runs `on_delete` and removes the entity if present, then commits either way.
/// * **Action**: runs `handle_action` on the entity; commits only when the action succeeded.
/// * **Reload**: replaces the collection with a fresh [`ActorEntity::load`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When the channel is full, client calls
    /// wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Loads the collection, then runs the event loop until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every entity hook. This allows entities to reach
    /// dependencies that were created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "pop_inventory::model::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        self.store = T::load(&context).await;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::next_id(&self.store, &context);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            T::on_commit(&self.store, Change::Created(&id), &context).await;
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::NextId { respond_to } => {
                    let id = T::next_id(&self.store, &context);
                    debug!(entity_type, %id, "NextId");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let removed = match self.position(&id) {
                        Some(pos) => {
                            if let Err(e) = self.store[pos].on_delete(&context).await {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let item = self.store.remove(pos);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            Some(item)
                        }
                        None => {
                            debug!(entity_type, %id, "Delete of absent id");
                            None
                        }
                    };
                    let change = Change::Deleted {
                        id: &id,
                        removed: removed.is_some(),
                    };
                    T::on_commit(&self.store, change, &context).await;
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    match self.store[pos].handle_action(action, &context).await {
                        Ok(result) => {
                            info!(entity_type, %id, "Action ok");
                            let change = Change::Action {
                                id: &id,
                                result: &result,
                            };
                            T::on_commit(&self.store, change, &context).await;
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Reload { respond_to } => {
                    self.store = T::load(&context).await;
                    info!(entity_type, size = self.store.len(), "Reloaded");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
