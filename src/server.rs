//! HTTP surface: routing, handlers and the serve loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::catalog::{ContentCatalog, ALL_CATEGORIES};
use crate::config::Config;
use crate::contact::{ContactForm, ContactSubmitter};
use crate::error::{LocalizedError, SiteError};
use crate::i18n::{delocalize, negotiate, Locale};
use crate::render::{self, ContactView, RenderContext};
use crate::routes::Route;

/// Shared state for every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<ContentCatalog>,
    pub submitter: ContactSubmitter,
}

impl AppState {
    pub fn new(config: Config, catalog: ContentCatalog) -> Self {
        let submitter = ContactSubmitter::new(config.contact_submit_delay);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            submitter,
        }
    }

    fn context(&self, locale: Locale) -> RenderContext<'_> {
        RenderContext::new(locale, &self.config.studio)
    }

    /// Parse the locale path segment; unknown codes render the 404 page in
    /// the default locale.
    fn locale(&self, code: &str) -> Result<Locale, LocalizedError> {
        Locale::from_code(code).map_err(|err| err.in_locale(self.config.default_locale))
    }
}

/// Build the site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/:locale", get(home))
        .route("/:locale/projects", get(projects))
        .route("/:locale/projects/:slug", get(project_detail))
        .route("/:locale/process", get(process))
        .route("/:locale/studio", get(studio))
        .route("/:locale/contact", get(contact_page).post(contact_submit))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ==================== Handlers ====================

async fn root(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(negotiate)
        .unwrap_or(state.config.default_locale);

    debug!(locale = %locale, "Redirecting root");
    Redirect::to(&Route::Home.href(locale))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn home(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    Ok(Html(render::home(&state.context(locale), &state.catalog)))
}

#[derive(Debug, Deserialize)]
struct ProjectsQuery {
    category: Option<String>,
}

// A query the extractor rejects (e.g. a repeated key) is treated as absent.
async fn projects(
    State(state): State<AppState>,
    Path(code): Path<String>,
    query: Option<Query<ProjectsQuery>>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    let category = query.and_then(|Query(query)| query.category);
    let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
    Ok(Html(render::projects(
        &state.context(locale),
        &state.catalog,
        category,
    )))
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    image: Option<String>,
}

async fn project_detail(
    State(state): State<AppState>,
    Path((code, slug)): Path<(String, String)>,
    query: Option<Query<DetailQuery>>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    let project = state
        .catalog
        .projects
        .find(&slug)
        .map_err(|err| err.in_locale(locale))?;

    // Anything that is not an in-range index shows the first image
    let image = query
        .and_then(|Query(query)| query.image)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);

    Ok(Html(render::project_detail(
        &state.context(locale),
        project,
        image,
    )))
}

async fn process(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    Ok(Html(render::process(&state.context(locale), &state.catalog)))
}

async fn studio(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    Ok(Html(render::studio(&state.context(locale), &state.catalog)))
}

async fn contact_page(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, LocalizedError> {
    let locale = state.locale(&code)?;
    Ok(Html(render::contact(
        &state.context(locale),
        &ContactView::empty(),
    )))
}

async fn contact_submit(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response, LocalizedError> {
    let locale = state.locale(&code)?;
    let ctx = state.context(locale);

    let request = match form.validate() {
        Ok(request) => request,
        Err(missing) => {
            debug!(missing = missing.len(), "Contact form rejected");
            let view = ContactView::rejected(form, missing);
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::contact(&ctx, &view)),
            )
                .into_response());
        }
    };

    let status = state.submitter.submit(&request, None).await;
    debug!(?status, "Contact form handled");

    Ok(Html(render::contact(&ctx, &ContactView::submitted())).into_response())
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    if let Some(target) = trailing_slash_target(&uri) {
        debug!(from = uri.path(), to = %target, "Redirecting to canonical path");
        return Redirect::permanent(&target).into_response();
    }

    let locale = delocalize(uri.path())
        .map(|(locale, _)| locale)
        .unwrap_or(state.config.default_locale);

    SiteError::NoRoute(uri.path().to_string())
        .in_locale(locale)
        .into_response()
}

/// Canonical location for a known page requested with a trailing slash
/// (`/pt/` -> `/pt`, `/en/projects/?category=x` -> `/en/projects?category=x`).
fn trailing_slash_target(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    let (locale, rest) = delocalize(path)?;
    let mut target = Route::from_path(&rest)?.href(locale);
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}
