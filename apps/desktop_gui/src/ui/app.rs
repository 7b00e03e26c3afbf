//! App shell: one top-level state holder, per-screen rendering, and the
//! outward side effects (profile export, contact action, photo loading).

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use eframe::egui;
use flow_core::{ContentPack, Screen, Session, EXPORT_FILE_NAME};
use image::GenericImageView;
use tracing::{info, warn};

use crate::ui::theme;
use crate::ui::widgets::{radar_chart, series_legend, RadarSeries};

/// Longest texture side the decoded photo is downscaled to. Rendering
/// scales further down per screen.
const PHOTO_TEXTURE_MAX_SIDE: f32 = 480.0;

enum PhotoState {
    NotLoaded,
    Ready {
        texture: egui::TextureHandle,
        size: egui::Vec2,
    },
    Failed,
}

pub struct ApplicantApp {
    session: Session,
    photo_override: Option<PathBuf>,
    photo: PhotoState,
    status: Option<String>,
    style_applied: bool,
}

impl ApplicantApp {
    pub fn new(content: ContentPack, photo_override: Option<PathBuf>) -> Self {
        Self {
            session: Session::new(content),
            photo_override,
            photo: PhotoState::NotLoaded,
            status: None,
            style_applied: false,
        }
    }

    // ------------------------- frame plumbing -------------------------

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (forward, back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        // On the quiz screen forward progress goes through the confirm
        // button, not the arrow key.
        if forward && self.session.screen() != Screen::Quiz {
            self.session.advance_screen();
        }
        if back {
            self.session.back_screen();
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("✨").size(18.0));
                ui.heading("Bewerbung");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let progress = self.session.progress_percent();
                    ui.label(
                        egui::RichText::new(format!("Fortschritt: {progress}%"))
                            .small()
                            .weak(),
                    );
                    ui.add(
                        egui::ProgressBar::new(f32::from(progress) / 100.0).desired_width(220.0),
                    );
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        if self.status.is_none() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.status {
                    ui.small(status.clone());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Ausblenden").clicked() {
                        self.status = None;
                    }
                });
            });
        });
    }

    // --------------------------- screens ------------------------------

    fn show_welcome_screen(&mut self, ui: &mut egui::Ui) {
        let applicant = self.session.content().applicant.clone();
        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Willkommen! 👋");
            ui.add_space(4.0);
            ui.label(
                "Schön, dass Sie da sind. In dieser kleinen App entdecken Sie meine \
                 Fähigkeiten, Motivation und Arbeitsweise – spielerisch und kompakt.",
            );
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                self.show_photo(ui, 160.0);
                ui.add_space(8.0);
                ui.strong(&applicant.name);
                ui.label(format!("Tel.: {}", applicant.phone));
                ui.label(format!("Email: {}", applicant.email));
            });
            ui.add_space(10.0);
            if ui.button("Los geht's ▸").clicked() {
                self.session.advance_screen();
            }
        });
    }

    fn show_motivation_screen(&mut self, ui: &mut egui::Ui) {
        let motivation = self.session.content().motivation.clone();
        let points = self.session.content().motivation_points.clone();
        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Motivation – Warum Bielefeld?");
            ui.add_space(4.0);
            ui.label(motivation);
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for point in &points {
                    theme::inset_frame(ui).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("✔").color(theme::CORRECT));
                            ui.label(point);
                        });
                    });
                }
            });
            ui.add_space(8.0);
            self.nav_buttons(ui, "Weiter");
        });
    }

    fn show_quiz_screen(&mut self, ui: &mut egui::Ui) {
        let question_total = self.session.content().questions.len();
        let index = self.session.quiz().current_index();
        let question = self.session.content().questions[index].clone();
        let selected = self.session.quiz().selected().map(str::to_string);
        let score = self.session.quiz().score();

        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Level 1 – Wer bin ich?");
            ui.add_space(6.0);
            ui.vertical_centered(|ui| self.show_photo(ui, 110.0));
            ui.add_space(6.0);
            ui.label(&question.prompt);
            ui.add_space(4.0);

            for option in &question.options {
                let chosen = selected.as_deref() == Some(option.label.as_str());
                let mut button = egui::Button::new(&option.label)
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if chosen {
                    let accent = if option.correct {
                        theme::CORRECT
                    } else {
                        theme::WRONG
                    };
                    button = button.stroke(egui::Stroke::new(1.5, accent));
                }
                if ui.add(button).clicked() {
                    self.session.select_answer(option.label.clone());
                }
                if chosen {
                    let verdict = if option.correct { "✔ Richtig" } else { "Nope" };
                    ui.small(verdict);
                }
            }

            // Explanation and confirmation only exist while an option is
            // chosen; confirming without a selection stays unreachable.
            if selected.is_some() {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&question.explanation).italics());
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Weiter").clicked() {
                        self.session.confirm_answer();
                    }
                    if ui.button("Zurück").clicked() {
                        self.session.back_screen();
                    }
                });
            }

            ui.add_space(6.0);
            ui.small(format!("Punktestand: {score} / {question_total}"));
            ui.small(format!("Frage {} von {question_total}", index + 1));
        });
    }

    fn show_matching_screen(&mut self, ui: &mut egui::Ui) {
        let skills = self.session.content().skills.clone();
        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Level 2 – Kompetenzen matchen");
            ui.add_space(4.0);
            ui.label(
                "Bitte schätzen Sie die Ausprägung der folgenden Kompetenzen auf einer \
                 Skala von 0 bis 100 ein.",
            );
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                for skill in &skills {
                    let mut value = self.session.assessment().score_for(&skill.name);
                    theme::inset_frame(&columns[0]).show(&mut columns[0], |ui| {
                        ui.horizontal(|ui| {
                            ui.strong(&skill.name);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.small(format!("{value}/100"));
                                },
                            );
                        });
                        let slider = egui::Slider::new(&mut value, 0..=100)
                            .step_by(10.0)
                            .show_value(false);
                        if ui.add(slider).changed() {
                            self.session.rate_skill(&skill.name, value);
                        }
                        ui.small(format!("Zielbereich: {}", skill.focus));
                    });
                    columns[0].add_space(4.0);
                }

                let axes: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
                let evaluator: Vec<f32> = skills
                    .iter()
                    .map(|s| f32::from(self.session.assessment().score_for(&s.name)))
                    .collect();
                let applicant: Vec<f32> =
                    skills.iter().map(|s| f32::from(s.self_score)).collect();

                let mut series = vec![RadarSeries {
                    label: "Recruiter-Einschätzung",
                    color: theme::EVALUATOR_ACCENT,
                    values: &evaluator,
                }];
                if self.session.assessment_complete() {
                    series.push(RadarSeries {
                        label: "Selbsteinschätzung Bewerberin",
                        color: theme::APPLICANT_ACCENT,
                        values: &applicant,
                    });
                }

                theme::inset_frame(&columns[1]).show(&mut columns[1], |ui| {
                    ui.small("Kompetenz-Radar");
                    radar_chart(ui, 280.0, &axes, &series);
                    series_legend(ui, &series);
                    ui.small(
                        "Die Selbsteinschätzung wird sichtbar, sobald alle Kompetenzen \
                         bewertet sind.",
                    );
                });
            });

            ui.add_space(8.0);
            self.nav_buttons(ui, "Weiter");
        });
    }

    fn show_cases_screen(&mut self, ui: &mut egui::Ui) {
        let cases = self.session.content().cases.clone();
        let selected = self.session.case_browser().selected();
        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Mini-Case – So gehe ich vor");
            ui.add_space(6.0);
            ui.columns(2, |columns| {
                for (i, case) in cases.iter().enumerate() {
                    let ui = &mut columns[0];
                    let focused = selected == Some(i);
                    let mut button = egui::Button::new(egui::RichText::new(&case.title).strong())
                        .min_size(egui::vec2(ui.available_width(), 44.0));
                    if focused {
                        button =
                            button.stroke(egui::Stroke::new(1.5, ui.visuals().selection.bg_fill));
                    }
                    if ui.add(button).clicked() {
                        self.session.select_case(i);
                    }
                    ui.small("Klicken zum Anzeigen der Schritte");
                    ui.add_space(4.0);
                }

                let ui = &mut columns[1];
                theme::inset_frame(ui).show(ui, |ui| {
                    ui.set_min_height(220.0);
                    match selected {
                        None => {
                            ui.weak("Bitte links einen Case wählen.");
                        }
                        Some(index) => {
                            for (n, step) in cases[index].steps.iter().enumerate() {
                                ui.label(format!("{}. {step}", n + 1));
                            }
                        }
                    }
                });
            });
            ui.add_space(8.0);
            self.nav_buttons(ui, "Abschließen 🏆");
        });
    }

    fn show_finish_screen(&mut self, ui: &mut egui::Ui) {
        theme::card_frame(ui).show(ui, |ui| {
            ui.heading("Vielen Dank! 🎉");
            ui.add_space(4.0);
            ui.label(
                "Sie haben alle Level abgeschlossen. Falls Sie mögen, können Sie meine \
                 Kurzdaten exportieren oder mich direkt kontaktieren.",
            );
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                if ui.button("⬇ Profil-Notizen exportieren (JSON)").clicked() {
                    self.export_profile_notes();
                }
                if ui.button("✉ Kontakt aufnehmen").clicked() {
                    self.open_mail_client();
                }
            });
            ui.add_space(8.0);
            if ui.button("Zurück").clicked() {
                self.session.back_screen();
            }
        });
    }

    fn nav_buttons(&mut self, ui: &mut egui::Ui, forward_label: &str) {
        ui.horizontal(|ui| {
            if ui.button(forward_label).clicked() {
                self.session.advance_screen();
            }
            if !self.session.screen().is_first() && ui.button("Zurück").clicked() {
                self.session.back_screen();
            }
        });
    }

    // ------------------------- side effects ---------------------------

    fn export_profile_notes(&mut self) {
        let payload = self.session.export_payload(Utc::now());
        let rendered = match payload.render_json() {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(%err, "profile export serialization failed");
                self.status = Some(format!("Export fehlgeschlagen: {err}"));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        else {
            // Dialog dismissed; nothing was acquired.
            return;
        };

        match fs::write(&path, rendered) {
            Ok(()) => {
                info!(path = %path.display(), "profile notes exported");
                self.status = Some(format!("Profil-Notizen gespeichert: {}", path.display()));
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "profile notes export failed");
                self.status = Some(format!("Export fehlgeschlagen: {err}"));
            }
        }
    }

    fn open_mail_client(&mut self) {
        let url = mailto_url(&self.session.content().applicant.email);

        #[cfg(target_os = "windows")]
        let result = std::process::Command::new("cmd")
            .args(["/C", "start", "", &url])
            .spawn();

        #[cfg(target_os = "macos")]
        let result = std::process::Command::new("open").arg(&url).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let result = std::process::Command::new("xdg-open").arg(&url).spawn();

        match result {
            Ok(_) => info!(%url, "opened mail handler"),
            Err(err) => {
                warn!(%url, %err, "failed to open mail handler");
                self.status = Some(format!("E-Mail-Programm konnte nicht geöffnet werden: {err}"));
            }
        }
    }

    // ----------------------------- photo -------------------------------

    fn show_photo(&mut self, ui: &mut egui::Ui, max_side: f32) {
        if matches!(self.photo, PhotoState::NotLoaded) {
            self.photo = self.load_photo(ui.ctx());
        }
        match &self.photo {
            PhotoState::Ready { texture, size } => {
                let scale = fit_scale(*size, max_side);
                ui.add(egui::Image::new((texture.id(), *size * scale)).corner_radius(12.0));
            }
            _ => {
                // Placeholder keeps the layout stable when the asset is
                // missing or undecodable.
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::splat(max_side), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 12.0, ui.visuals().faint_bg_color);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "📷",
                    egui::FontId::proportional(30.0),
                    ui.visuals().weak_text_color(),
                );
            }
        }
    }

    fn load_photo(&self, ctx: &egui::Context) -> PhotoState {
        let path = self
            .photo_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.session.content().applicant.photo_path));

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), %err, "applicant photo not readable");
                return PhotoState::Failed;
            }
        };
        let decoded = match image::load_from_memory(&bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(path = %path.display(), %err, "applicant photo not decodable");
                return PhotoState::Failed;
            }
        };

        let (orig_w, orig_h) = decoded.dimensions();
        let scale = (PHOTO_TEXTURE_MAX_SIDE / (orig_w.max(orig_h) as f32)).min(1.0);
        let resized = if scale < 1.0 {
            decoded.resize(
                (orig_w as f32 * scale).max(1.0) as u32,
                (orig_h as f32 * scale).max(1.0) as u32,
                image::imageops::FilterType::Triangle,
            )
        } else {
            decoded
        };
        let rgba = resized.to_rgba8();
        let [w, h] = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
        let texture = ctx.load_texture("applicant-photo", color_image, egui::TextureOptions::LINEAR);
        PhotoState::Ready {
            texture,
            size: egui::vec2(w as f32, h as f32),
        }
    }
}

impl eframe::App for ApplicantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            theme::apply_app_style(ctx);
            self.style_applied = true;
        }

        self.handle_keyboard(ctx);
        self.show_header(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(ui.available_width().clamp(480.0, 760.0));
                    ui.add_space(12.0);
                    match self.session.screen() {
                        Screen::Welcome => self.show_welcome_screen(ui),
                        Screen::Motivation => self.show_motivation_screen(ui),
                        Screen::Quiz => self.show_quiz_screen(ui),
                        Screen::Matching => self.show_matching_screen(ui),
                        Screen::Cases => self.show_cases_screen(ui),
                        Screen::Finish => self.show_finish_screen(ui),
                    }
                    ui.add_space(12.0);
                });
            });
        });
    }
}

fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}

fn fit_scale(size: egui::Vec2, max_side: f32) -> f32 {
    (max_side / size.x.max(size.y)).min(1.0)
}
