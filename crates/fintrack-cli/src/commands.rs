//! Resource subcommands.

use anyhow::{Context, Result};
use clap::Subcommand;
use fintrack_core::{FintrackApi, Payload, ResourceAccessor};
use tokio::io::AsyncReadExt;

/// The five operations every resource supports.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CrudAction {
    /// List every item
    List,
    /// Fetch one item
    Get { id: String },
    /// Create an item from a JSON object (`-` reads stdin)
    Create { data: String },
    /// Replace an item with a JSON object (`-` reads stdin)
    Update { id: String, data: String },
    /// Delete an item
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TransactionAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// This week's transaction totals
    Weekly,
    /// Expenses grouped by category
    ExpenseCategories,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DebtAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// Largest outstanding debts
    Top,
}

pub async fn run_crud(accessor: &ResourceAccessor, action: CrudAction) -> Result<Payload> {
    let payload = match action {
        CrudAction::List => accessor.get_all().await?,
        CrudAction::Get { id } => accessor.get_by_id(id).await?,
        CrudAction::Create { data } => {
            let body = read_body(&data).await?;
            accessor.create(&body).await?
        }
        CrudAction::Update { id, data } => {
            let body = read_body(&data).await?;
            accessor.update(id, &body).await?
        }
        CrudAction::Delete { id } => accessor.delete(id).await?,
    };
    Ok(payload)
}

pub async fn run_transactions(api: &FintrackApi, action: TransactionAction) -> Result<Payload> {
    let transactions = api.transactions();
    match action {
        TransactionAction::Crud(action) => run_crud(&transactions, action).await,
        TransactionAction::Weekly => Ok(transactions.get_weekly().await?),
        TransactionAction::ExpenseCategories => Ok(transactions.get_expense_categories().await?),
    }
}

pub async fn run_debts(api: &FintrackApi, action: DebtAction) -> Result<Payload> {
    let debts = api.debts();
    match action {
        DebtAction::Crud(action) => run_crud(&debts, action).await,
        DebtAction::Top => Ok(debts.get_top_debts().await?),
    }
}

/// Parse a JSON argument, reading it from stdin when given as `-`.
async fn read_body(arg: &str) -> Result<Payload> {
    if arg == "-" {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .context("Failed to read request body from stdin")?;
        return parse_body(&input);
    }
    parse_body(arg)
}

fn parse_body(text: &str) -> Result<Payload> {
    serde_json::from_str(text).with_context(|| format!("Request body is not valid JSON: {}", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(
            parse_body(r#"{"name": "Groceries", "type": "expense"}"#).unwrap(),
            json!({"name": "Groceries", "type": "expense"})
        );
        assert_eq!(parse_body("[1, 2]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_parse_body_rejects_invalid_json() {
        let err = parse_body("{amount: 10}").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_read_body_inline() {
        assert_eq!(read_body(r#"{"amount":10}"#).await.unwrap(), json!({"amount": 10}));
    }
}
