use eframe::CreationContext;
use media_uploader::app::MediaUploader;
use media_uploader::config::{self, AppConfig};
use media_uploader::logging;
use media_uploader::session::{EnvSession, SessionProvider, StaticSession, USER_EMAIL_ENV};
use media_uploader::upload::HttpUploader;
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_create().unwrap_or_else(|err| {
        tracing::warn!("Using default config: {}", err);
        AppConfig::default()
    });

    // The environment wins so a launcher can sign a user in without touching the config file.
    let session: Arc<dyn SessionProvider> = if std::env::var_os(USER_EMAIL_ENV).is_some() {
        Arc::new(EnvSession::default())
    } else {
        Arc::new(StaticSession::new(config.user_email.clone()))
    };
    let transport = Arc::new(HttpUploader::new(config.endpoint.clone()));
    tracing::info!("Uploading to {}", transport.endpoint());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([560.0, 620.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Media Uploader",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(MediaUploader::new(session, transport))),
    )
}
