//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the lifecycle of a stored resource plus a custom `Action` variant for
/// resource-specific logic:
///
/// - **Create**: allocates an id via [`ActorEntity::next_id`] and builds the entity from
///   [`ActorEntity::Create`].
/// - **Get**: fetches one entity by id.
/// - **List**: snapshot of the whole collection in insertion order.
/// - **NextId**: the id the next `Create` would receive right now.
/// - **Delete**: removes by id; answers `None` when the id was absent.
/// - **Action**: executes a custom [`ActorEntity::Action`].
/// - **Reload**: rebuilds the collection through [`ActorEntity::load`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    NextId {
        respond_to: Response<T::Id>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Reload {
        respond_to: Response<usize>,
    },
}
