use std::sync::Arc;

use clap::Parser;
use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, middleware::Cors, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use armory_backend::api::{HealthApi, ItemsApi};
use armory_backend::cli::{seed, Cli, Commands};
use armory_backend::config::{init_logging, ApplicationSettings};
use armory_backend::stores::ItemStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = ApplicationSettings::from_env();

    let db: DatabaseConnection = Database::connect(&settings.database_url).await?;
    tracing::info!("Connected to backing store: {}", settings.database_url);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => {
            Migrator::up(&db, None).await?;
            tracing::info!("Database migrations completed");
        }
        Commands::Seed { file } => {
            Migrator::up(&db, None).await?;
            let store = ItemStore::new(db.clone());
            seed::seed_items(&store, &file).await?;
        }
        Commands::Serve => {
            Migrator::up(&db, None).await?;

            // A dead store at startup is logged but not fatal; each request
            // reports its own failure as store_unavailable
            if let Err(err) = db.ping().await {
                tracing::warn!("Backing store unreachable at startup: {}", err);
            }

            let item_store = Arc::new(ItemStore::new(db.clone()));
            let items_api = ItemsApi::new(item_store);

            let api_service = OpenApiService::new(
                (HealthApi, items_api),
                "Armory Catalog API",
                "1.0.0",
            )
            .server(format!("http://{}", settings.bind_address()));

            // Generate Swagger UI from the OpenAPI service
            let ui = api_service.swagger_ui();

            // The catalog is consumed cross-origin by a browser frontend
            let app = Route::new()
                .nest("/swagger", ui)
                .nest("/", api_service)
                .with(Cors::new());

            tracing::info!("Starting server on http://{}", settings.bind_address());
            tracing::info!(
                "Swagger UI available at http://{}/swagger",
                settings.bind_address()
            );

            Server::new(TcpListener::bind(settings.bind_address()))
                .run(app)
                .await?;
        }
    }

    Ok(())
}
