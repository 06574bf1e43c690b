//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one resource collection
//! and serves every request against it, one message at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Messages are processed sequentially inside one task, so the
/// store and the injected context never need a `Mutex`: the task *is* the lock.
///
/// The store is an [`IndexMap`] so listing returns entities in the order they were created,
/// and removal uses `shift_remove` so a delete leaves the remaining order intact.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the context into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NotePatch { text: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Replace = NoteCreate;
///     type Patch = NotePatch;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_replace(&mut self, r: NoteCreate, _: &()) -> Result<(), Self::Error> {
///         self.text = r.text;
///         Ok(())
///     }
///     async fn on_patch(&mut self, p: NotePatch, _: &()) -> Result<(), Self::Error> {
///         if let Some(text) = p.text { self.text = text; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let next = std::sync::atomic::AtomicU32::new(1);
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         next.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     client.delete(note.id).await.unwrap();
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the mailbox. When it is full, client calls wait.
    /// * `next_id_fn` - produces the id for each created entity. It must never repeat a value
    ///   for the lifetime of the actor.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed by reference to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Vehicle" instead of "resource_api::model::vehicle::Vehicle"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Replace {
                    id,
                    replace,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?replace, "Replace");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .on_replace(replace, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Replaced"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .on_patch(patch, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Patched"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Patch failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.shift_remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Seed { batch, respond_to } => {
                    if !self.store.is_empty() {
                        debug!(entity_type, size = self.store.len(), "Seed skipped");
                        let _ = respond_to.send(Ok(0));
                        continue;
                    }
                    let mut inserted = 0;
                    for params in batch {
                        // A bad fixture row is skipped, it doesn't abort the import.
                        if self.create(params, &context, entity_type).await.is_ok() {
                            inserted += 1;
                        }
                    }
                    info!(entity_type, inserted, "Seeded");
                    let _ = respond_to.send(Ok(inserted));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }
}
