use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use studyhub_backend::{
    config::{get_config, init_config},
    routes,
    store::HostedStore,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = Arc::new(HostedStore::from_config(config)?);
    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/catalog/semesters",
            get(routes::catalog::list_semesters),
        )
        .route(
            "/api/catalog/semesters/:id",
            get(routes::catalog::get_semester),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/notes",
            get(routes::content::list_notes),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/syllabus",
            get(routes::content::get_syllabus),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/papers",
            get(routes::content::list_papers),
        )
        .route("/api/papers/:id", get(routes::content::get_paper))
        .route("/api/mock-tests", get(routes::mock_tests::list_mock_tests))
        .route("/api/search", get(routes::search::search))
        .route(
            "/api/mock-tests/:test_id/sessions",
            post(routes::quiz::start_session),
        )
        .route(
            "/api/sessions/:id",
            get(routes::quiz::get_session).delete(routes::quiz::exit_session),
        )
        .route("/api/sessions/:id/select", post(routes::quiz::select_option))
        .route("/api/sessions/:id/advance", post(routes::quiz::advance))
        .route("/api/sessions/:id/restart", post(routes::quiz::restart))
        .layer(axum::middleware::from_fn_with_state(
            studyhub_backend::middleware::rate_limit::limiter(config.public_rps),
            studyhub_backend::middleware::rate_limit::rps_guard,
        ));

    let admin_api = Router::new()
        .route("/api/admin/notes", post(routes::admin::create_note))
        .route(
            "/api/admin/notes/:id",
            axum::routing::patch(routes::admin::update_note).delete(routes::admin::delete_note),
        )
        .route("/api/admin/syllabus", post(routes::admin::create_syllabus))
        .route(
            "/api/admin/syllabus/:id",
            axum::routing::patch(routes::admin::update_syllabus)
                .delete(routes::admin::delete_syllabus),
        )
        .route("/api/admin/papers", post(routes::admin::create_paper))
        .route(
            "/api/admin/papers/:id",
            axum::routing::patch(routes::admin::update_paper).delete(routes::admin::delete_paper),
        )
        .route(
            "/api/admin/mock-tests",
            post(routes::admin::create_mock_test),
        )
        .route(
            "/api/admin/mock-tests/:id",
            axum::routing::patch(routes::admin::update_mock_test)
                .delete(routes::admin::delete_mock_test),
        )
        .layer(axum::middleware::from_fn(
            studyhub_backend::middleware::auth::require_admin,
        ))
        .layer(axum::middleware::from_fn_with_state(
            studyhub_backend::middleware::rate_limit::limiter(config.admin_rps),
            studyhub_backend::middleware::rate_limit::rps_guard,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(admin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
