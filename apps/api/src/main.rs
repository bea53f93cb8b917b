use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
mod extractors;
pub mod handlers;
mod middleware;

use application::locks::PairLocks;
use config::Config;
use handlers::{auth, friends, health, messages, statuses, users};
use middleware::auth::AuthMiddleware;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with JSON support
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,api=debug,actix_web=info".into());

    let is_json = std::env::var("LOG_FORMAT").unwrap_or_default() == "json";

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }

    let config = Config::from_env()?;
    let config_data = web::Data::new(config.clone());
    tracing::info!("Starting linkup API server...");

    let db = infrastructure::database::init_database(&config.database_url).await?;
    Migrator::up(&db, None).await?;

    // Serializes relationship mutations per user pair for the whole process.
    let pair_locks = web::Data::new(PairLocks::new());

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", server_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(AuthMiddleware)
            .app_data(web::Data::new(db.clone()))
            .app_data(config_data.clone())
            .app_data(pair_locks.clone())
            // Health (no auth)
            .service(health::health_check)
            .service(
                web::scope("/api/v1/auth")
                    .service(auth::register)
                    .service(auth::login),
            )
            .service(
                web::scope("/api/v1/users")
                    .service(users::list_users)
                    .service(users::update_profile_name)
                    .service(users::update_profile_image)
                    .service(users::get_user),
            )
            .service(
                web::scope("/api/v1/friends")
                    .service(friends::send_friend_request)
                    .service(friends::respond_friend_request)
                    .service(friends::list_friend_ids)
                    .service(friends::list_incoming_requests)
                    .service(friends::list_outgoing_requests)
                    .service(friends::list_friends),
            )
            .service(
                web::scope("/api/v1/messages")
                    .service(messages::send_message)
                    .service(messages::list_conversation)
                    .service(messages::delete_messages),
            )
            .service(
                web::scope("/api/v1/statuses")
                    .service(statuses::post_status)
                    .service(statuses::feed),
            )
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
