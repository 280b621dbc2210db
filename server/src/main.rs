#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context as _;
use leptos::prelude::*;
use tokio::sync::watch;

use server::api::{self, ApiState};
use server::config::Config;
use server::relay::ResendClient;
use server::sanity::SanityClient;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/fn/{*fn_name}";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let config = Config::from_env()?;
    let conf = get_configuration(None).context("Could not read the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    // Flipped once on shutdown so in-flight content queries give up.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        content: Arc::new(SanityClient::new(&config.sanity)),
        shutdown: shutdown_rx,
    };
    let notifier = ResendClient::new(&config.mail.base_url, &config.mail.api_key);
    let api_state = ApiState::new(Arc::new(notifier), &config.mail);

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx)
        .merge(api::router(api_state));

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            log::info!("shutting down");
            let _ = shutdown_tx.send(true);
        })
        .await
        .context("Server error")?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || provide_context(ctx.clone());
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(error) => {
                log::warn!("Could not install the SIGTERM handler: {error}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
