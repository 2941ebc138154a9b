//! Button example binary
//!
//! Wires the button enabled-flag reducer into a Store and dispatches a few
//! actions against it.

use button::{ButtonAction, button_reducer};
use reducible_core::TableReducer;
use reducible_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), reducible_runtime::StoreError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "button=debug,reducible_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Button Example: Reducible Architecture ===\n");

    // The reducer's own default seeds the store.
    let reducer: TableReducer<bool, ButtonAction> = button_reducer();
    let initial = *reducer.default_state();
    let store = Store::new(initial, reducer);

    let enabled = store.state(|s| *s).await;
    tracing::info!(enabled, "Store seeded from reducer default");
    println!("Initial enabled flag: {enabled}");

    println!("\n>>> Sending: Disabled");
    let enabled = store.send(ButtonAction::Disabled).await?;
    println!("Enabled after Disabled: {enabled}");

    println!("\n>>> Sending: Clicked (no transition registered)");
    let enabled = store.send(ButtonAction::Clicked).await?;
    println!("Enabled after Clicked: {enabled}");

    println!("\n>>> Sending: Default");
    let enabled = store.send(ButtonAction::Default).await?;
    println!("Enabled after Default: {enabled}");

    store.close();
    println!("\nStore closed; further sends are rejected:");
    println!("  send(Disabled) -> {:?}", store.send(ButtonAction::Disabled).await);

    println!("\n=== Demonstration Complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • Action: ButtonAction (fixed kind registry)");
    println!("  • Reducer: table-driven, default true, identity on miss");
    println!("  • Store: owns the flag, dispatches, notifies subscribers");

    Ok(())
}
