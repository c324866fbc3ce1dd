use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::controller::{FieldId, OrderReceipt};
use crate::domain::{Category, Smoothie};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures surface as `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle the rendering layer uses to send form events to the order service.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(OrderClient => fn input_field(field: FieldId, value: String) -> () as OrderRequest::InputField, Error = OrderError);
client_method!(OrderClient => fn blur_field(field: FieldId) -> () as OrderRequest::BlurField, Error = OrderError);
client_method!(OrderClient => fn toggle_ingredient(category: Category, ingredient: String, checked: bool) -> () as OrderRequest::ToggleIngredient, Error = OrderError);
client_method!(OrderClient => fn submit_order() -> OrderReceipt as OrderRequest::SubmitOrder, Error = OrderError);
client_method!(OrderClient => fn list_orders() -> Vec<Smoothie> as OrderRequest::ListOrders, Error = OrderError);

#[cfg(test)]
client_method!(OrderClient => fn get_selected(category: Category) -> Vec<String> as OrderRequest::GetSelected, Error = OrderError);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closed_service_is_a_communication_error() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let client = OrderClient::new(sender);

        let err = client.submit_order().await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunicationError("Actor closed".to_string()));
    }

    #[tokio::test]
    async fn dropped_responder_is_a_communication_error() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = OrderClient::new(sender);

        let responder = tokio::spawn(async move {
            if let Some(OrderRequest::ListOrders { respond_to }) = receiver.recv().await {
                drop(respond_to);
            }
        });

        let err = client.list_orders().await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunicationError("Actor dropped".to_string()));
        responder.await.unwrap();
    }
}
