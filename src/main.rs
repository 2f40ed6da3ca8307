use chrono::Utc;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard::config::Config;
use taskboard::services::{Sidebar, TaskView};
use taskboard::state::AppState;

#[derive(Serialize)]
struct Dashboard {
    sidebar: Sidebar,
    view: TaskView,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "taskboard=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::new_from_env()?;
    let state = AppState::load(&config).await?;

    state.board.sync_task_counts().await?;

    let sidebar = state.board.sidebar().await?;
    let view = state.board.task_view(config.category, &config.query, Utc::now()).await?;
    info!(
        "Showing {} of {} tasks (filter: {}, search: {:?})",
        view.tasks.len(),
        view.counts.all,
        config.query.status,
        config.query.search
    );

    println!("{}", serde_json::to_string_pretty(&Dashboard { sidebar, view })?);
    Ok(())
}
