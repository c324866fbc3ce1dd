use tracing::{error, info, instrument};

use crate::actors::OrderService;
use crate::clients::OrderClient;
use crate::config::OrderSettings;
use crate::error::OrderError;

/// Starts the order service and hands out its client.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    #[instrument(name = "order_system", skip(settings))]
    pub fn new(settings: OrderSettings) -> Self {
        info!(
            max_fruits = settings.max_fruits,
            max_proteins = settings.max_proteins,
            "Starting order system"
        );

        let (order_service, order_client) = OrderService::new(32, settings);
        let handles = vec![tokio::spawn(order_service.run())];

        info!("Order system started successfully");

        Self {
            order_client,
            handles,
        }
    }

    /// Stops the service and waits for it to finish. Join errors are logged
    /// and shutdown carries on.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), OrderError> {
        info!("Shutting down order system");

        let _ = self.order_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
