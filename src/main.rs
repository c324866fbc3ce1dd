use tracing::{info, warn, Instrument};

use smoothie_order::app_system::{setup_tracing, OrderSystem};
use smoothie_order::config::load_settings;
use smoothie_order::controller::FieldId;
use smoothie_order::domain::Category;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings = load_settings().map_err(|e| e.to_string())?;
    info!("Starting smoothie order demo");

    let system = OrderSystem::new(settings);
    let client = &system.order_client;

    // A submit with a one-letter name is rejected before anything is built.
    let span = tracing::info_span!("invalid_submission");
    async {
        client.input_field(FieldId::CustomerName, "J".to_string()).await?;
        if let Err(e) = client.submit_order().await {
            warn!(error = %e, "Submission rejected");
        }
        Ok::<_, smoothie_order::error::OrderError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("order_submission");
    let receipt = async {
        client.input_field(FieldId::CustomerName, "Jordan".to_string()).await?;
        client.input_field(FieldId::Size, "medium".to_string()).await?;
        client.input_field(FieldId::BaseLiquid, "almond-milk".to_string()).await?;

        for fruit in ["banana", "strawberry"] {
            client.toggle_ingredient(Category::Fruits, fruit.to_string(), true).await?;
        }
        client.toggle_ingredient(Category::Vegetables, "spinach".to_string(), true).await?;
        for protein in ["greek-yogurt", "chia-seeds", "peanut-butter"] {
            if let Err(e) = client.toggle_ingredient(Category::Proteins, protein.to_string(), true).await {
                warn!(error = %e, protein, "Protein not added");
            }
        }
        client.toggle_ingredient(Category::Extras, "honey".to_string(), true).await?;

        client.submit_order().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(order_number = receipt.order_number, "Order processed successfully");
    let json = serde_json::to_string_pretty(&receipt).map_err(|e| e.to_string())?;
    println!("{json}");

    let history = client.list_orders().await.map_err(|e| e.to_string())?;
    info!(orders = history.len(), "Order history loaded");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
