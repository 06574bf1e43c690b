use crate::clients::{MenuClient, VehicleClient};
use crate::codes::CodeSequence;
use tracing::{error, info};

/// Owns the running resource actors and hands out their clients.
///
/// Each resource gets its own actor task and its own [`CodeSequence`], so VINs and SKUs are
/// numbered independently, both starting at 1000. Nothing is persisted; a new system starts
/// from empty collections.
///
/// # Example
///
/// ```rust
/// use actor_framework::ActorClient;
/// use resource_api::lifecycle::ResourceSystem;
/// use resource_api::model::VehicleCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ResourceSystem::new(16);
///
///     let car = system
///         .vehicle_client
///         .create_vehicle(VehicleCreate::new("Mazda", "MX-5", 2019))
///         .await?;
///     assert_eq!(car.vin, "1M8GDM9A_1000");
///     assert_eq!(system.vehicle_client.list().await?.len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ResourceSystem {
    /// Client for the cars collection.
    pub vehicle_client: VehicleClient,

    /// Client for the dango menu.
    pub menu_client: MenuClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ResourceSystem {
    /// Spawns both resource actors with a mailbox of `buffer_size` requests each.
    pub fn new(buffer_size: usize) -> Self {
        let (vehicle_actor, vehicle_client) = crate::vehicle_actor::new(buffer_size);
        let (menu_actor, menu_client) = crate::menu_actor::new(buffer_size);

        let vehicle_handle = tokio::spawn(vehicle_actor.run(CodeSequence::vin()));
        let menu_handle = tokio::spawn(menu_actor.run(CodeSequence::sku()));

        info!(buffer_size, "Resource actors started");

        Self {
            vehicle_client: VehicleClient::new(vehicle_client),
            menu_client: MenuClient::new(menu_client),
            handles: vec![vehicle_handle, menu_handle],
        }
    }

    /// Drops this system's clients and waits for both actors to drain and exit.
    ///
    /// Clones handed out earlier (for example to the HTTP router) keep their actor alive, so
    /// drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.vehicle_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
