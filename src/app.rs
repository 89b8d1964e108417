// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait, assembling the page sections into one scrollable
//! view and coordinating content loading, theme and navigation.

use crate::models::pack::ContentPack;
use crate::ui::carousel::CarouselState;
use crate::ui::showcase::ShowcaseState;
use crate::ui::testimonials::TestimonialsState;
use crate::ui::theme::ThemePreference;
use crate::ui::{carousel, hero, sections, showcase, testimonials};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Jump targets for the nav bar and hero CTAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Problem,
    Solution,
    Data,
    Architecture,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Problem,
        Section::Solution,
        Section::Data,
        Section::Architecture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Problem => "PROBLEM",
            Section::Solution => "SOLUTION",
            Section::Data => "DATA",
            Section::Architecture => "ARCHITECTURE",
        }
    }
}

/// Result of background slide photo loading.
struct LoadedPhoto {
    slide_index: usize,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Main application state.
pub struct AdvisorApp {
    /// Presentation content (slides, exercises, testimonials, stats)
    content: ContentPack,

    /// Directory slide photo paths are resolved against
    content_dir: PathBuf,

    /// Carousel state machine
    carousel: CarouselState,

    /// Dataset showcase tab state
    showcase: ShowcaseState,

    /// Testimonial stack focus state
    testimonials: TestimonialsState,

    /// Loaded slide photo textures, keyed by slide index
    slide_photos: HashMap<usize, egui::TextureHandle>,

    /// Receiver for background photo loading
    photo_loader: Option<Receiver<Result<LoadedPhoto, String>>>,

    /// Theme preference, persisted across runs
    theme_preference: ThemePreference,

    /// Section to scroll to on this frame
    jump_to: Option<Section>,

    /// Whether the about window is open
    show_about: bool,
}

impl AdvisorApp {
    /// Create the application, restoring the stored theme preference.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let content = ContentPack::default();
        let mut app = Self {
            carousel: CarouselState::new(content.slides.len()),
            content,
            content_dir: PathBuf::from("assets"),
            showcase: ShowcaseState::new(),
            testimonials: TestimonialsState::default(),
            slide_photos: HashMap::new(),
            photo_loader: None,
            theme_preference: ThemePreference::load(cc.storage),
            jump_to: None,
            show_about: false,
        };
        app.start_photo_loader();
        app
    }

    /// Spawn a background thread decoding every slide photograph.
    fn start_photo_loader(&mut self) {
        let jobs: Vec<(usize, PathBuf)> = self
            .content
            .slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                slide
                    .image
                    .as_ref()
                    .map(|rel| (index, self.content_dir.join(rel)))
            })
            .collect();
        if jobs.is_empty() {
            self.photo_loader = None;
            return;
        }

        let (sender, receiver) = channel();
        self.photo_loader = Some(receiver);

        std::thread::spawn(move || {
            for (slide_index, path) in jobs {
                let result = crate::io::media::load_image(&path)
                    .map(|img| LoadedPhoto {
                        slide_index,
                        width: img.width,
                        height: img.height,
                        pixels: img.pixels,
                    })
                    .map_err(|e| e.to_string());
                if sender.send(result).is_err() {
                    // Receiver dropped; a newer content pack took over.
                    return;
                }
            }
        });
    }

    /// Replace the active content pack and restart dependent state.
    fn install_pack(&mut self, pack: ContentPack, dir: PathBuf) {
        log::info!(
            "installing content pack: {} slides, {} exercises, {} testimonials",
            pack.slides.len(),
            pack.exercises.len(),
            pack.testimonials.len()
        );
        self.carousel = CarouselState::new(pack.slides.len());
        self.content = pack;
        self.content_dir = dir;
        self.slide_photos.clear();
        self.start_photo_loader();
    }

    fn open_content_pack(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Content packs", &["yaml", "yml", "json"])
            .pick_file()
        {
            let extension = path.extension().and_then(|s| s.to_str());
            let result = match extension {
                Some("yaml") | Some("yml") => crate::io::serialization::import_yaml(&path),
                Some("json") => crate::io::serialization::import_json(&path),
                _ => {
                    log::error!("Unsupported file extension: {:?}", extension);
                    return;
                }
            };
            match result {
                Ok(pack) => {
                    let dir = path
                        .parent()
                        .map(PathBuf::from)
                        .unwrap_or_else(|| PathBuf::from("."));
                    self.install_pack(pack, dir);
                }
                Err(e) => log::error!("Failed to import content pack: {}", e),
            }
        }
    }

    fn export_content_pack(&self, path: PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => crate::io::serialization::export_yaml(&self.content, &path),
            Some("json") => crate::io::serialization::export_json(&self.content, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };
        match result {
            Ok(_) => log::info!("Exported content pack to {}", path.display()),
            Err(e) => log::error!("Failed to export content pack: {}", e),
        }
    }

    /// Move decoded photos off the channel into GPU textures.
    fn drain_photo_loader(&mut self, ctx: &egui::Context) {
        let Some(receiver) = self.photo_loader.take() else {
            return;
        };
        let mut done = false;
        loop {
            match receiver.try_recv() {
                Ok(Ok(photo)) => {
                    let size = [photo.width as usize, photo.height as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, &photo.pixels);
                    let texture = ctx.load_texture(
                        format!("slide-photo-{}", photo.slide_index),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.slide_photos.insert(photo.slide_index, texture);
                    log::info!("Loaded slide photo {}", photo.slide_index);
                }
                Ok(Err(e)) => {
                    // Cosmetic: the painted placeholder stays.
                    log::warn!("Slide photo unavailable: {}", e);
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    done = true;
                    break;
                }
            }
        }
        if !done {
            self.photo_loader = Some(receiver);
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Content Pack...").clicked() {
                        self.open_content_pack();
                        ui.close_menu();
                    }
                    ui.menu_button("Export Content Pack", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("content-pack.yaml")
                                .save_file()
                            {
                                self.export_content_pack(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("content-pack.json")
                                .save_file()
                            {
                                self.export_content_pack(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    for pref in [
                        ThemePreference::System,
                        ThemePreference::Light,
                        ThemePreference::Dark,
                    ] {
                        if ui
                            .selectable_label(self.theme_preference == pref, pref.label())
                            .clicked()
                        {
                            self.theme_preference = pref;
                            log::info!("Theme preference: {:?}", pref);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    for section in Section::ALL {
                        if ui.button(section.label()).clicked() {
                            self.jump_to = Some(section);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                draw_brand_glyph(ui);
                ui.label(egui::RichText::new("EXERCISE ADVISOR").size(12.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Status dot.
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                    let pulse = crate::util::anim::ping_pong(ui.input(|i| i.time), 2.0);
                    ui.painter().circle_filled(
                        dot.center(),
                        3.0,
                        egui::Color32::from_rgb(0x22, 0xC5, 0x5E).gamma_multiply(0.4 + 0.6 * pulse),
                    );
                    ui.label(
                        egui::RichText::new("SYS.ACTIVE")
                            .monospace()
                            .size(9.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.separator();

                    for section in Section::ALL.iter().rev() {
                        if ui
                            .add(egui::Button::new(
                                egui::RichText::new(section.label()).monospace().size(10.0),
                            ))
                            .clicked()
                        {
                            self.jump_to = Some(*section);
                        }
                    }
                });
            });
        });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let jump = self.jump_to.take();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let max_width = 1100.0_f32.min(ui.available_width());
                    let margin = ((ui.available_width() - max_width) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_max_width(max_width);
                            self.show_sections(ui, jump);
                        });
                    });
                });
        });
    }

    fn show_sections(&mut self, ui: &mut egui::Ui, jump: Option<Section>) {
        let scroll_here = |response: egui::Response, section: Section| {
            if jump == Some(section) {
                response.scroll_to_me(Some(egui::Align::TOP));
            }
        };

        if let Some(section) = hero::show(ui) {
            self.jump_to = Some(section);
        }
        ui.add_space(24.0);
        sections::stats_strip(ui, &self.content.stats);
        ui.add_space(48.0);

        sections::section_label(ui, "002 — The Problem");
        let heading = sections::heading(ui, &["POOR FORM IS", "INVISIBLE TO THE LIFTER."]);
        scroll_here(heading, Section::Problem);
        ui.label(
            egui::RichText::new(
                "Most injuries come from form errors the athlete can't see. Existing \
                 solutions need a coach or expensive hardware.",
            )
            .size(13.0)
            .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(20.0);
        carousel::show(ui, &mut self.carousel, &self.content.slides, &self.slide_photos);
        ui.add_space(20.0);
        sections::problem_cards(ui);
        ui.add_space(48.0);

        sections::section_label(ui, "003 — Pipeline");
        let heading = sections::heading(ui, &["FOUR STAGES.", "ONE CAMERA."]);
        scroll_here(heading, Section::Solution);
        ui.label(
            egui::RichText::new(
                "Same angle, different exercise, different verdict. That's why rules \
                 fail and ML wins.",
            )
            .size(13.0)
            .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(20.0);
        sections::pipeline(ui);
        ui.add_space(48.0);

        sections::section_label(ui, "004 — Fitness-AQA Dataset");
        let heading = sections::heading(ui, &["THREE EXERCISES.", "4,979 REPS."]);
        scroll_here(heading, Section::Data);
        ui.label(
            egui::RichText::new(
                "Each rep is a single video clip with temporal and binary error \
                 annotations. Zero subject overlap between splits.",
            )
            .size(13.0)
            .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(20.0);
        showcase::show(ui, &mut self.showcase, &self.content.exercises);
        ui.add_space(48.0);

        sections::section_label(ui, "005 — Architecture");
        let heading = sections::heading(ui, &["TCN WITH", "DUAL-TASK HEADS."]);
        scroll_here(heading, Section::Architecture);
        ui.label(
            egui::RichText::new(
                "Parallelizable, causal, and captures full-rep context through \
                 exponentially dilated convolutions.",
            )
            .size(13.0)
            .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(20.0);
        sections::architecture(ui);
        ui.add_space(48.0);

        sections::section_label(ui, "006 — Field Notes");
        sections::heading(ui, &["THE PEOPLE WHO", "SEE THE INJURIES."]);
        ui.add_space(20.0);
        testimonials::show(ui, &mut self.testimonials, &self.content.testimonials);
        ui.add_space(32.0);

        sections::footer(ui);
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about;
        egui::Window::new("About")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Exercise Advisor").strong());
                ui.label("Interactive presentation for ML posture analysis.");
                ui.label(
                    egui::RichText::new("Pose estimation + temporal convolutional network \
                                         for injury-risk detection.")
                        .weak(),
                );
            });
        self.show_about = open;
    }
}

/// Small three-joint brand glyph next to the app name.
fn draw_brand_glyph(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
    let painter = ui.painter();
    let color = ui.visuals().strong_text_color();
    let stroke = egui::Stroke::new(1.5, color);
    let top = egui::pos2(rect.center().x, rect.top() + 5.0);
    let left = egui::pos2(rect.left() + 4.0, rect.bottom() - 4.0);
    let right = egui::pos2(rect.right() - 4.0, rect.bottom() - 4.0);
    painter.line_segment([top, left], stroke);
    painter.line_segment([top, right], stroke);
    painter.circle_stroke(top, 2.0, stroke);
    painter.circle_stroke(left, 1.5, stroke);
    painter.circle_stroke(right, 1.5, stroke);
}

impl eframe::App for AdvisorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_photo_loader(ctx);
        self.theme_preference.apply(ctx);

        self.show_menu_bar(ctx);
        self.show_nav_bar(ctx);

        // Keyboard navigation for the carousel.
        if !ctx.wants_keyboard_input() {
            let now = ctx.input(|i| i.time);
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                self.carousel.go_next(now);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                self.carousel.go_prev(now);
            }
        }

        self.show_page(ctx);

        if self.show_about {
            self.show_about_window(ctx);
        }

        // The carousel clock, pose figures and status dots animate
        // continuously.
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.theme_preference.store(storage);
    }
}
