use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::config::OrderSettings;
use crate::controller::{FieldId, OrderController, OrderReceipt};
use crate::domain::{Category, Smoothie};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// Owns the order controller and applies form events one message at a time,
/// so each submission runs as a single synchronous call sequence.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    controller: OrderController,
}

impl OrderService {
    pub fn new(buffer_size: usize, settings: OrderSettings) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            controller: OrderController::new(settings),
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::InputField { field, value, respond_to } => {
                    self.handle_input_field(field, value, respond_to);
                }
                OrderRequest::BlurField { field, respond_to } => {
                    self.handle_blur_field(field, respond_to);
                }
                OrderRequest::ToggleIngredient { category, ingredient, checked, respond_to } => {
                    self.handle_toggle_ingredient(category, ingredient, checked, respond_to);
                }
                OrderRequest::SubmitOrder { respond_to } => {
                    self.handle_submit_order(respond_to);
                }
                OrderRequest::ListOrders { respond_to } => {
                    self.handle_list_orders(respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
                #[cfg(test)]
                OrderRequest::GetSelected { category, respond_to } => {
                    let _ = respond_to.send(Ok(self.controller.form().selected(category).to_vec()));
                }
            }
        }
        info!(orders = self.controller.history().len(), "OrderService stopped");
    }

    // Field values can hold customer names, so only the field id is traced.
    #[instrument(fields(field = %field), skip(self, value, respond_to))]
    fn handle_input_field(&mut self, field: FieldId, value: String, respond_to: ServiceResponse<(), OrderError>) {
        debug!("Processing input_field request");
        self.controller.input_field(field, value);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(field = %field), skip(self, respond_to))]
    fn handle_blur_field(&mut self, field: FieldId, respond_to: ServiceResponse<(), OrderError>) {
        debug!("Processing blur_field request");
        let result = self.controller.blur_field(field).map_err(|issue| {
            warn!(message = %issue.message, "Field validation failed");
            OrderError::InvalidField(issue)
        });
        let _ = respond_to.send(result);
    }

    #[instrument(fields(category = %category, ingredient = %ingredient), skip(self, respond_to))]
    fn handle_toggle_ingredient(
        &mut self,
        category: Category,
        ingredient: String,
        checked: bool,
        respond_to: ServiceResponse<(), OrderError>,
    ) {
        debug!("Processing toggle_ingredient request");
        let result = self.controller.toggle_ingredient(category, &ingredient, checked);
        if let Err(e) = &result {
            warn!(error = %e, "Selection blocked");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_submit_order(&mut self, respond_to: ServiceResponse<OrderReceipt, OrderError>) {
        info!("Processing submit_order request");
        let result = self.controller.submit();
        match &result {
            Ok(receipt) => info!(
                order_number = receipt.order_number,
                total = %receipt.total_price,
                "Order placed successfully"
            ),
            Err(e) => warn!(error = %e, "Order rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_orders(&self, respond_to: ServiceResponse<Vec<Smoothie>, OrderError>) {
        debug!("Processing list_orders request");
        let _ = respond_to.send(Ok(self.controller.history().to_vec()));
    }
}
