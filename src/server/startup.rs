use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{
    config::{Config, SuperuserConfig},
    data::user::UserRepository,
    error::Error,
    model::app::AppState,
    router,
    service::user::UserService,
    util::email::normalize_email,
};

/// Initialize the tracing subscriber at the configured level
pub fn init_logging(config: &Config) -> Result<(), Error> {
    dioxus_logger::init(config.log_level)
        .map_err(|e| Error::InternalError(format!("Failed to initialize logger: {}", e)))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the configured superuser unless a user with that email already exists
pub async fn ensure_superuser(
    db: &DatabaseConnection,
    superuser: &SuperuserConfig,
) -> Result<(), Error> {
    let email = normalize_email(&superuser.email);

    if UserRepository::new(db).find_by_email(&email).await?.is_some() {
        tracing::debug!("Superuser {} already exists", email);

        return Ok(());
    }

    UserService::new(db)
        .create_superuser(&email, &superuser.password)
        .await?;

    tracing::info!("Created superuser {}", email);

    Ok(())
}

/// Bind the listener and serve the API until the process is stopped
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes().with_state(AppState::from(db));

    let listener = TcpListener::bind(&config.listen_address).await?;
    tracing::info!("Listening on {}", config.listen_address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Start the server: logging, database, optional superuser, then the HTTP listener
pub async fn run(config: Config) -> Result<(), Error> {
    init_logging(&config)?;

    let db = connect_to_database(&config).await?;

    if let Some(superuser) = &config.superuser {
        ensure_superuser(&db, superuser).await?;
    }

    tracing::info!("Starting server");

    serve(&config, db).await
}
