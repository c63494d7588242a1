//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Writes that touch more than one table run inside a single transaction opened by the
//! repository and closed by [`finish`].

pub mod auto_store;
pub mod catalog;
pub mod listing;
pub mod location;
pub mod settings;
pub mod slider;
pub mod stock;
pub mod tag;

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ColumnTrait, DatabaseTransaction, DbErr,
};

const LIKE_ESCAPE: char = '\\';

/// Commits `txn` when `result` is Ok, otherwise rolls it back.
///
/// Rollback is attempted exactly once. A rollback failure is logged and the
/// original error is returned unchanged.
pub(crate) async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> Result<T, DbErr> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(
                    error = %err,
                    rollback_error = %rollback_err,
                    "Failed to roll back transaction"
                );
            }
            Err(err)
        }
    }
}

/// Case-insensitive "contains" condition on a text column.
///
/// `%` and `_` in the term match literally. Returns `None` for a missing or blank
/// search term so callers can skip the filter.
pub(crate) fn contains_ignore_case<C: ColumnTrait>(
    column: C,
    search: Option<&str>,
) -> Option<Expr> {
    let term = search.map(str::trim).filter(|term| !term.is_empty())?;
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    Some(
        Expr::expr(Func::lower(Expr::col(column)))
            .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
    )
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Page size handed to the paginator, which rejects zero.
pub(crate) fn page_size(per_page: u64) -> u64 {
    Ord::max(per_page, 1)
}
