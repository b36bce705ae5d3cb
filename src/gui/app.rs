// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::state::AppState,
    convert::MenuPage,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Menu Page Builder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last loaded sheet and where it came from
    pub page: Option<MenuPage>,
    pub loaded_from: Option<PathBuf>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text: String = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: GUI up, default output {}", out_path_text);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            page: None,
            loaded_from: None,
            status: s!("Pick a product sheet (CSV or TSV) and press Load"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Push the typed output path into ExportOptions if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            components::source_bar::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::preview_table::draw(ui, self);
        });
    }
}
