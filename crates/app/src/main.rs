//! Inventra client shell: wires stores, services and the router, then
//! lands on the start route.

use app::{AppContext, Navigation, Router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let origin = std::env::var("INVENTRA_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:4200".to_string());
    let ctx = AppContext::bootstrap(&origin).await?;
    info!(
        api = %ctx.http.base_url(),
        authenticated = ctx.session.is_authenticated(),
        "client core ready"
    );

    let mut router = Router::with_default_routes(ctx.session.clone());
    match router.navigate("/", None) {
        Navigation::Allowed { .. } => {
            let products = app::pages::products::list_page(&ctx);
            products.load().await;
            info!(count = products.items().len(), "product catalog loaded");
        }
        Navigation::RedirectLogin => info!("no stored session, landing on /login"),
        other => info!(?other, "unexpected landing state"),
    }
    Ok(())
}
