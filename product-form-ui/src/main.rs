// Desktop entry point for the product forms
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use eframe::egui;
    use product_form::config::ClientConfig;
    use product_form_ui::app::ProductFormsApp;

    env_logger::init();

    let config = ClientConfig::from_env().context("invalid PRODUCT_API_URL")?;
    log::info!("Products endpoint: {}", config.endpoint);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Product Forms"),
        ..Default::default()
    };

    eframe::run_native(
        "Product Forms",
        native_options,
        Box::new(|cc| Ok(Box::new(ProductFormsApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

// The web build starts through `product_form_ui::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
