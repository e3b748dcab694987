use eframe::egui;
use product_form::forms::UncontrolledSubmitter;
use product_form::payload::NAME_MAX_LEN;

use super::{field_error, image_picker, status_message, submit_button};
use crate::state_manager::SubmitterState;

fn violation(submitter: &UncontrolledSubmitter, field: &str) -> Option<String> {
    submitter
        .violations()
        .iter()
        .find(|v| v.field == field)
        .map(|v| v.message())
}

/// Form without a model: widgets write straight into the live form.
pub fn render_native_form(ui: &mut egui::Ui, state: &mut SubmitterState<UncontrolledSubmitter>) {
    ui.heading("Create Product");
    ui.label(egui::RichText::new("Native form").small().weak());
    ui.add_space(8.0);

    let submitter = state.submitter_mut();
    let name_error = violation(submitter, "name");
    let price_error = violation(submitter, "price");
    let quantity_error = violation(submitter, "quantity");
    let form = submitter.form_mut();

    ui.add(
        egui::TextEdit::singleline(form.name_mut())
            .hint_text("Product Name")
            .char_limit(NAME_MAX_LEN)
            .desired_width(f32::INFINITY),
    );
    field_error(ui, name_error.as_deref());

    ui.add(
        egui::TextEdit::singleline(form.price_mut())
            .hint_text("Enter a Price")
            .desired_width(f32::INFINITY),
    );
    field_error(ui, price_error.as_deref());

    ui.add(
        egui::TextEdit::singleline(form.barcode_mut())
            .hint_text("Barcode (optional)")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::singleline(form.category_mut())
            .hint_text("Category")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::multiline(form.description_mut())
            .hint_text("Description")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    ui.checkbox(form.featured_mut(), "Featured");

    if let Some(images) = image_picker(ui, form.images()) {
        form.select_images(images);
    }

    ui.add(
        egui::TextEdit::singleline(form.quantity_mut())
            .hint_text("Quantity")
            .desired_width(f32::INFINITY),
    );
    field_error(ui, quantity_error.as_deref());

    ui.add(
        egui::TextEdit::singleline(form.tags_mut())
            .hint_text("Tags (comma separated)")
            .desired_width(f32::INFINITY),
    );

    ui.checkbox(form.published_mut(), "Published");

    ui.add_space(8.0);
    let clicked = ui.horizontal(|ui| submit_button(ui, state.status())).inner;
    if clicked {
        state.submit();
    }

    status_message(ui, state.status());
}
