use eframe::egui;
use product_form::forms::{FieldId, FieldValue, ManagedSubmitter};
use product_form::payload::NAME_MAX_LEN;

use super::{field_error, image_picker, status_message, submit_button};
use crate::state_manager::SubmitterState;

fn text_field(ui: &mut egui::Ui, submitter: &mut ManagedSubmitter, id: FieldId, hint: &str) {
    let mut value = submitter.model().text(id).to_string();
    let mut edit = egui::TextEdit::singleline(&mut value)
        .hint_text(hint)
        .desired_width(f32::INFINITY);
    if id == FieldId::Name {
        edit = edit.char_limit(NAME_MAX_LEN);
    }
    if ui.add(edit).changed() {
        submitter.change(id, FieldValue::Text(value));
    }
    field_error(ui, submitter.model().error(id));
}

fn checkbox(ui: &mut egui::Ui, submitter: &mut ManagedSubmitter, id: FieldId, label: &str) {
    let mut checked = submitter.model().checked(id);
    if ui.checkbox(&mut checked, label).changed() {
        submitter.change(id, FieldValue::Checked(checked));
    }
}

/// Form driven by the declarative model: every edit is a change event.
pub fn render_managed_form(ui: &mut egui::Ui, state: &mut SubmitterState<ManagedSubmitter>) {
    ui.heading("Create Product");
    ui.label(egui::RichText::new("Managed form").small().weak());
    ui.add_space(8.0);

    let submitter = state.submitter_mut();

    text_field(ui, submitter, FieldId::Name, "Product Name");
    text_field(ui, submitter, FieldId::Price, "Enter a Price");
    text_field(ui, submitter, FieldId::Barcode, "Barcode (optional)");
    text_field(ui, submitter, FieldId::Category, "Category");

    let mut description = submitter.model().text(FieldId::Description).to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut description)
            .hint_text("Description")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        submitter.change(FieldId::Description, FieldValue::Text(description));
    }

    checkbox(ui, submitter, FieldId::Featured, "Featured");

    if let Some(images) = image_picker(ui, submitter.model().files(FieldId::Images)) {
        submitter.change(FieldId::Images, FieldValue::Files(images));
    }

    text_field(ui, submitter, FieldId::Quantity, "Quantity");
    text_field(ui, submitter, FieldId::Tags, "Tags (comma separated)");
    checkbox(ui, submitter, FieldId::Published, "Published");

    ui.add_space(8.0);
    let clicked = ui.horizontal(|ui| submit_button(ui, state.status())).inner;
    if clicked {
        state.submit();
    }

    status_message(ui, state.status());
}
