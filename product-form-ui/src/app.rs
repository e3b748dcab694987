use eframe::egui;
use product_form::client::ProductClient;
use product_form::config::ClientConfig;
use product_form::forms::{ManagedSubmitter, UncontrolledSubmitter};

use crate::state_manager::SubmitterState;
use crate::ui::{render_managed_form, render_native_form};
use crate::platform;

/// Root composer: both product forms side by side, sharing nothing.
pub struct ProductFormsApp {
    native: SubmitterState<UncontrolledSubmitter>,
    managed: SubmitterState<ManagedSubmitter>,
}

impl ProductFormsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Self {
        platform::install_panic_hook();
        log::info!("🚀 Starting Product Forms against {}", config.endpoint);

        Self {
            native: SubmitterState::new(
                UncontrolledSubmitter::new(ProductClient::new(config.clone())),
                "native",
            ),
            managed: SubmitterState::new(
                ManagedSubmitter::new(ProductClient::new(config)),
                "managed",
            ),
        }
    }
}

impl eframe::App for ProductFormsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update state from async operations
        self.native.update_from_async();
        self.managed.update_from_async();

        if self.native.is_in_flight() || self.managed.is_in_flight() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📦 Product Forms");
                ui.separator();
                ui.label("Two ways to create the same product");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                egui::ScrollArea::vertical()
                    .id_salt("native_form")
                    .show(&mut columns[0], |ui| {
                        ui.group(|ui| render_native_form(ui, &mut self.native));
                    });
                egui::ScrollArea::vertical()
                    .id_salt("managed_form")
                    .show(&mut columns[1], |ui| {
                        ui.group(|ui| render_managed_form(ui, &mut self.managed));
                    });
            });
        });
    }
}
