use std::sync::Arc;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use session_api::routes::create_router;
use session_api::shared::config::{AuthConfig, ServerConfig};
use session_api::shared::database::{Database, InMemoryUserStore, UserRepository, UserStore};
use session_api::shared::services::AppState;

// Import models for OpenAPI schema
use session_api::domains::auth::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        session_api::domains::auth::handlers::auth_handler::signup,
        session_api::domains::auth::handlers::auth_handler::login,
        session_api::domains::auth::handlers::auth_handler::refresh,
        session_api::domains::auth::handlers::auth_handler::logout,
        session_api::domains::auth::handlers::auth_handler::get_me
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        TokenResponse,
        RefreshTokenRequest,
        MessageResponse,
        UserResponse,
        Location
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication and session endpoints")
    ),
    info(
        title = "Session API Server",
        description = "Dual-token (access + refresh) session service",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: 쿠키 두 개 + Bearer 헤더
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "AccessCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("access_token"))),
            );
            components.add_security_scheme(
                "RefreshCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("refresh_token"))),
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드 (불변, 시작 시 한 번)
    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env()?;

    // 사용자 저장소 선택
    let users: Arc<dyn UserStore> = match &server_config.database_url {
        Some(db_url) => {
            let db = Database::new(db_url).await?;
            db.initialize().await?;
            tracing::info!("Database: PostgreSQL");
            Arc::new(UserRepository::new(db.pool().clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory user store (data is lost on restart)");
            Arc::new(InMemoryUserStore::new())
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(&auth_config, users);

    // CORS 설정 (쿠키 전송을 위해 credentials 허용)
    let cors = CorsLayer::new()
        .allow_origin(server_config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state);

    let listener = TcpListener::bind(&server_config.bind_addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /api");

    axum::serve(listener, app).await?;
    Ok(())
}
