//! Dashboard views: which backend data each route shows.

use anyhow::{bail, Result};
use fintrack_core::routes::{self, Resolution};
use fintrack_core::{FintrackApi, Payload, View, ROUTES};
use serde_json::json;
use tracing::info;

/// The route table as JSON, in declaration order.
pub fn route_table() -> Payload {
    ROUTES
        .iter()
        .map(|route| {
            json!({
                "path": route.path,
                "name": route.name,
                "view": route.view.to_string(),
            })
        })
        .collect()
}

/// Resolve `path` and load the data for its view.
pub async fn open(api: &FintrackApi, path: &str) -> Result<Payload> {
    let view = match routes::resolve(path) {
        Resolution::Matched(route) => route.view,
        Resolution::NotFound { path } => bail!("No dashboard view at {}", path),
    };
    info!("Opening {} view", view);
    Ok(load(api, view).await?)
}

async fn load(api: &FintrackApi, view: View) -> fintrack_core::Result<Payload> {
    let payload = match view {
        View::Dashboard => {
            let transactions = api.transactions();
            let debts = api.debts();
            let (weekly, expense_categories, top_debts) = tokio::try_join!(
                transactions.get_weekly(),
                transactions.get_expense_categories(),
                debts.get_top_debts(),
            )?;
            json!({
                "weekly": weekly,
                "expense_categories": expense_categories,
                "top_debts": top_debts,
            })
        }
        View::Categories => json!({ "categories": api.categories().get_all().await? }),
        View::Transaction => {
            let transactions = api.transactions();
            let categories = api.categories();
            let (transactions, categories) =
                tokio::try_join!(transactions.get_all(), categories.get_all())?;
            json!({ "transactions": transactions, "categories": categories })
        }
        View::Debts => json!({ "debts": api.debts().get_all().await? }),
        View::Wishlist => json!({ "wishlist": api.wishlists().get_all().await? }),
        View::Invesment => json!({ "investments": api.investments().get_all().await? }),
    };
    Ok(payload)
}
