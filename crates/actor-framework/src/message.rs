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
/// # The Collection Contract
/// Every resource speaks the same set of operations, so there is one message enum generic over
/// the entity instead of ad-hoc messages per resource:
///
/// - **List**: every entity, in insertion order.
/// - **Get**: one entity by id, `None` when absent.
/// - **Create**: validate, assign an id, run `on_create`, append. Replies with the stored entity.
/// - **Replace**: overwrite all mutable fields of an existing entity.
/// - **Patch**: overwrite the supplied fields of an existing entity.
/// - **Delete**: remove an existing entity.
/// - **Seed**: bulk create, only when the collection is still empty.
///
/// The payload types come from the [`ActorEntity`] associated types, so a vehicle payload
/// can't reach the menu actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        replace: T::Replace,
        respond_to: Response<()>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<()>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Seed {
        batch: Vec<T::Create>,
        respond_to: Response<usize>,
    },
}
