//! Pure render functions: each reads its submitter, draws it and dispatches
//! change/submit events. No direct backend calls.

pub mod managed_form;
pub mod native_form;

use eframe::egui;
use product_form::submission::{Outcome, SubmissionStatus};

pub use managed_form::render_managed_form;
pub use native_form::render_native_form;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "avif", "ico", "tif", "tiff",
];

/// Mirrors an `accept="image/*"` file input.
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn dropped_name(file: &egui::DroppedFile) -> Option<String> {
    file.path
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| (!file.name.is_empty()).then(|| file.name.clone()))
}

/// Drop zone for product images. Returns the new selection when it changed.
/// The selection is display-only.
pub fn image_picker(ui: &mut egui::Ui, selected: &[String]) -> Option<Vec<String>> {
    let mut changed = None;

    ui.label("Product Images");
    let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if selected.is_empty() {
            ui.weak("Drop image files here");
        } else {
            for name in selected {
                ui.label(format!("🖼 {}", name));
            }
            if ui.small_button("Clear").clicked() {
                changed = Some(Vec::new());
            }
        }
    });

    if ui.rect_contains_pointer(frame.response.rect) {
        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        let images: Vec<String> = dropped
            .iter()
            .filter(|file| file.mime.starts_with("image/") || file.mime.is_empty())
            .filter_map(dropped_name)
            .filter(|name| is_image_file(name))
            .collect();
        if !images.is_empty() {
            log::debug!("🖼 [UI] {} image(s) selected", images.len());
            changed = Some(images);
        }
    }

    changed
}

pub fn field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(egui::Color32::RED, error);
    }
}

/// Submit button plus spinner. Returns true when clicked.
pub fn submit_button(ui: &mut egui::Ui, status: &SubmissionStatus) -> bool {
    let label = if status.loading { "Creating..." } else { "Create Product" };
    let clicked = ui
        .add_enabled(!status.loading, egui::Button::new(label))
        .clicked();
    if status.loading {
        ui.spinner();
    }
    clicked
}

pub fn status_message(ui: &mut egui::Ui, status: &SubmissionStatus) {
    if status.message.is_empty() {
        return;
    }
    let color = match status.last_outcome {
        Some(Outcome::Succeeded) => egui::Color32::from_rgb(0, 200, 0),
        Some(Outcome::Failed) => egui::Color32::RED,
        None => ui.visuals().text_color(),
    };
    ui.colored_label(color, &status.message);
}
