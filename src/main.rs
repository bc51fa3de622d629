use anyhow::{Context, Result};
use iced::{Size, Task};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use martial_games::config::{log_filter, Startup};
use martial_games::ui::AppModel;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Data lives next to the working directory, as shipped.
    let base_dir = PathBuf::from(".");

    let rt = Runtime::new().context("Could not start runtime")?;
    let startup = match rt.block_on(Startup::load(&base_dir)) {
        Ok(startup) => startup,
        Err(e) => {
            error!(error = %e, "failed to load catalog");
            return Err(e).context("Could not load the games catalog");
        }
    };
    drop(rt);

    info!(games = startup.catalog.len(), "starting interface");

    iced::application(AppModel::title, AppModel::update, AppModel::view)
        .subscription(AppModel::subscription)
        .theme(AppModel::theme)
        .window_size(Size::new(540.0, 900.0))
        .run_with(move || (AppModel::new(startup), Task::none()))
        .context("Interface exited with an error")
}
