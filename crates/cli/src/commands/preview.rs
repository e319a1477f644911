use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::header,
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use saviour_site_core::parse_site_toml;
use saviour_site_core::types::Route;
use saviour_site_generator::{render_page, scripts, styles};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// Pages are re-rendered on every request so edits to site.toml show up
/// on the next reload; the file watcher pushes that reload over SSE.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌍 Starting preview server...");
    println!("   Site: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!("site.toml not found in {}", path.display());
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("   ✓ Loaded: {}", site.foundation.name);
    println!("   ✓ Domain: {}", site.site.domain);
    println!("   ✓ Pages: {}", Route::ALL.len());

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let mut app = Router::new();
    for route in Route::ALL {
        app = app.route(
            route.path(),
            get(move |state: State<AppState>| page_handler(state, route)),
        );
    }
    let app = app
        .route("/css/site.css", get(stylesheet_handler))
        .route("/js/contact-form.js", get(contact_form_handler))
        .route("/js/nav-menu.js", get(nav_menu_handler))
        .route("/_reload", get(sse_handler))
        .nest_service("/assets", ServeDir::new(path.join("assets")))
        .with_state(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Filter out temporary files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Re-render the requested page from the current site.toml
async fn page_handler(State(state): State<AppState>, route: Route) -> Response {
    let site_toml_path = state.site_path.join("site.toml");
    let site = match parse_site_toml(&site_toml_path) {
        Ok(site) => site,
        Err(e) => {
            return Html(format!(
                r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
                e
            ))
            .into_response();
        }
    };

    Html(render_page(route, &site, true)).into_response()
}

async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        styles::SITE_CSS,
    )
}

async fn contact_form_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        scripts::contact_form_js(),
    )
}

async fn nav_menu_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        scripts::nav_menu_js(),
    )
}
