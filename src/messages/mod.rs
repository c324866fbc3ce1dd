use tokio::sync::oneshot;

use crate::controller::{FieldId, OrderReceipt};
use crate::domain::{Category, Smoothie};
use crate::error::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Form events and queries for the order service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum OrderRequest {
    InputField {
        field: FieldId,
        value: String,
        respond_to: ServiceResponse<(), OrderError>,
    },
    BlurField {
        field: FieldId,
        respond_to: ServiceResponse<(), OrderError>,
    },
    ToggleIngredient {
        category: Category,
        ingredient: String,
        checked: bool,
        respond_to: ServiceResponse<(), OrderError>,
    },
    SubmitOrder {
        respond_to: ServiceResponse<OrderReceipt, OrderError>,
    },
    ListOrders {
        respond_to: ServiceResponse<Vec<Smoothie>, OrderError>,
    },
    Shutdown,
    #[cfg(test)]
    GetSelected {
        category: Category,
        respond_to: ServiceResponse<Vec<String>, OrderError>,
    },
}
