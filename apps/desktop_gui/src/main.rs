//! Desktop front end for the gamified applicant self-presentation.

mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing::info;

use crate::config::load_content;
use crate::ui::ApplicantApp;

#[derive(Parser, Debug)]
struct Args {
    /// TOML content pack replacing the built-in presentation content.
    #[arg(long)]
    content: Option<std::path::PathBuf>,
    /// Override for the applicant photo asset.
    #[arg(long)]
    photo: Option<std::path::PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let content = match load_content(args.content.as_deref()) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("failed to load content pack: {err:#}");
            std::process::exit(2);
        }
    };
    info!(applicant = %content.applicant.name, "starting presentation session");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bewerbung")
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([860.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bewerbung",
        options,
        Box::new(move |_cc| Ok(Box::new(ApplicantApp::new(content, args.photo)))),
    )
}
