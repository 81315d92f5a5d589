use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use educhat::agent::{Assistant, DocumentSearchTool, OpenAiEngine};
use educhat::api::{router, AppState};
use educhat::chat::ChatService;
use educhat::config::Settings;
use educhat::lms::{eduplus_tools, EduplusClient};
use educhat::store::{ConversationStore, PgStore};
use educhat::tools::Tool;
use educhat::Result;

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;

    let store = PgStore::connect(&settings.database_url).await?;
    store.init_schema().await?;
    let store: Arc<dyn ConversationStore> = Arc::new(store);

    let lms = Arc::new(EduplusClient::new(
        &settings.eduplus_url,
        &settings.eduplus_token,
        &settings.bot_feed_url,
    )?);

    let mut tools: Vec<Arc<dyn Tool>> = eduplus_tools(lms);
    tools.push(Arc::new(DocumentSearchTool::new(
        &settings.openai_api_key,
        &settings.vector_store_id,
        settings.openai_base_url.clone(),
    )?));

    let engine = OpenAiEngine::new(&settings.openai_api_key, settings.openai_base_url.clone())?;
    let assistant = Arc::new(Assistant::new(Arc::new(engine), tools));
    let service = Arc::new(ChatService::new(store.clone(), assistant));

    let app = router(AppState { service, store });

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
