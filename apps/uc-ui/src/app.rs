use egui::{Color32, ComboBox, Ui};
use std::path::PathBuf;
use tracing::warn;
use uc_app::{ConverterForm, Settings, load_settings};
use uc_core::{Category, Unit};

/// Settings file read at startup when present.
const SETTINGS_FILE: &str = "unitconv.yaml";

/// Load settings from `UNITCONV_CONFIG` or `./unitconv.yaml`, falling back to defaults.
pub fn startup_settings() -> Settings {
    let path = std::env::var_os("UNITCONV_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

    if !path.exists() {
        return Settings::default();
    }
    match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring settings at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

pub struct ConverterApp {
    form: ConverterForm,
}

impl ConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        Self {
            form: ConverterForm::new(settings),
        }
    }

    fn category_selector(&mut self, ui: &mut Ui) {
        let mut category = self.form.category();
        ComboBox::from_label("Category")
            .selected_text(category.label())
            .show_ui(ui, |ui| {
                for c in Category::ALL {
                    ui.selectable_value(&mut category, c, c.label());
                }
            });
        self.form.select_category(category);
    }

    fn unit_selectors(&mut self, ui: &mut Ui) {
        let units = self.form.units();

        let mut from = self.form.from_unit();
        unit_combo(ui, "From", &mut from, units);
        if let Err(e) = self.form.select_from(from) {
            warn!("From selection rejected: {}", e);
        }

        let mut to = self.form.to_unit();
        unit_combo(ui, "To", &mut to, units);
        if let Err(e) = self.form.select_to(to) {
            warn!("To selection rejected: {}", e);
        }
    }
}

fn unit_combo(ui: &mut Ui, label: &str, selected: &mut Unit, units: &[Unit]) {
    ComboBox::from_label(label)
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for &unit in units {
                ui.selectable_value(selected, unit, unit.label());
            }
        });
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Unit Converter");
            ui.add_space(8.0);

            self.category_selector(ui);
            self.unit_selectors(ui);

            ui.horizontal(|ui| {
                ui.label("Value");
                let response = ui.text_edit_singleline(&mut self.form.input);
                let enter =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Convert").clicked() || enter {
                    // Errors land on the form's error line.
                    let _ = self.form.submit();
                }
            });

            ui.separator();
            ui.label(self.form.result_text());
            if !self.form.error_text().is_empty() {
                ui.colored_label(Color32::RED, self.form.error_text());
            }
        });
    }
}
