//! HTTP server.
//!
//! | Route | Response | Cache-Control |
//! |-------|----------|---------------|
//! | `GET /` | invitation page | `public, max-age=0, must-revalidate` |
//! | `GET /api/gallery` | [`GalleryPayload`](crate::types::GalleryPayload), 500 on read failure | `no-cache, no-store, max-age=0, must-revalidate` |
//! | `GET /api/particles` | current particle field, 404 when particles are off | `no-store` |
//! | `GET /images/*` | files under `<content_root>/images` | `public, max-age=31536000, immutable` |
//!
//! The gallery is resolved on every request so new files show up without a
//! restart. The particle loop is mounted once when the state is built and
//! torn down with it.

use crate::config::{ConfigError, SiteConfig};
use crate::effects::EffectGate;
use crate::effects::particle_loop::ParticleLoop;
use crate::gallery::GalleryResolver;
use crate::page::{PageContext, render_page};
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const PAGE_CACHE: &str = "public, max-age=0, must-revalidate";
pub const NO_STORE: &str = "no-cache, no-store, max-age=0, must-revalidate";
pub const IMMUTABLE: &str = "public, max-age=31536000, immutable";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    config: Arc<SiteConfig>,
    gate: EffectGate,
    resolver: GalleryResolver,
    particles: Option<ParticleLoop>,
}

impl AppState {
    /// Build state reading the gallery from disk. Mounts the particle loop,
    /// so this must run inside a tokio runtime.
    pub fn new(config: Arc<SiteConfig>) -> Self {
        let resolver = GalleryResolver::new(&config);
        Self::with_resolver(config, resolver)
    }

    pub fn with_resolver(config: Arc<SiteConfig>, resolver: GalleryResolver) -> Self {
        let gate = EffectGate::from_site(&config);
        let particles = ParticleLoop::mount(&gate);
        Self {
            inner: Arc::new(Inner {
                config,
                gate,
                resolver,
                particles,
            }),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    pub fn gate(&self) -> &EffectGate {
        &self.inner.gate
    }

    pub fn resolver(&self) -> &GalleryResolver {
        &self.inner.resolver
    }

    pub fn particles(&self) -> Option<&ParticleLoop> {
        self.inner.particles.as_ref()
    }
}

pub fn router(state: AppState) -> Router {
    let images = Router::new()
        .nest_service("/images", ServeDir::new(state.config().images_dir()))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(IMMUTABLE),
        ));

    Router::new()
        .route("/", get(index_handler))
        .route("/api/gallery", get(gallery_handler))
        .route("/api/particles", get(particles_handler))
        .with_state(state)
        .merge(images)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: Arc<SiteConfig>) -> Result<(), ServeError> {
    config.validate()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(Arc::clone(&config));
    tracing::info!(
        gallery = %state.resolver().base_dir().display(),
        slots = state.resolver().slot_count(),
        "gallery source"
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

// ============================================================================
// Handlers
// ============================================================================

async fn index_handler(State(state): State<AppState>) -> Response {
    let gallery = state.resolver().resolve();
    let field = state.particles().map(ParticleLoop::current);
    let ctx = PageContext {
        config: state.config(),
        gate: state.gate(),
        gallery: &gallery,
        particles: field.as_deref(),
    };
    let markup = render_page(&ctx, &mut rand::thread_rng());
    (
        [(header::CACHE_CONTROL, PAGE_CACHE)],
        Html(markup.into_string()),
    )
        .into_response()
}

async fn gallery_handler(State(state): State<AppState>) -> Response {
    let resolution = state.resolver().resolve();
    let status = if resolution.is_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    (
        status,
        [(header::CACHE_CONTROL, NO_STORE)],
        Json(resolution.to_payload()),
    )
        .into_response()
}

async fn particles_handler(State(state): State<AppState>) -> Response {
    let Some(particles) = state.particles() else {
        return (StatusCode::NOT_FOUND, [(header::CACHE_CONTROL, NO_STORE)]).into_response();
    };
    let field = particles.current().render(&mut rand::thread_rng());
    ([(header::CACHE_CONTROL, NO_STORE)], Json(field)).into_response()
}
