//! Data access for causes, donations and contact messages.
//!
//! The one operation with a real correctness contract lives here:
//! [`record_donation`] inserts the donation row and bumps the targeted
//! cause's raised amount as a single transaction, so the two writes are
//! never observed half-applied.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entities::{cause, contact, donation, Cause};

pub async fn all_causes(db: &DatabaseConnection) -> Result<Vec<cause::Model>, DbErr> {
    Cause::find().all(db).await
}

pub async fn cause_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<cause::Model>, DbErr> {
    Cause::find_by_id(id).one(db).await
}

/// Record a donation, atomically crediting the targeted cause.
///
/// With `cause_id = None` the donation goes to the general fund and no cause
/// balance changes. With `cause_id = Some(id)` the insert and the balance
/// update commit together or not at all: any failure after `begin` (including
/// an update that matches no row) rolls the transaction back, so a donation
/// row never persists without its matching balance credit.
///
/// Returns the generated donation id.
pub async fn record_donation(
    db: &DatabaseConnection,
    cause_id: Option<i32>,
    donor_name: &str,
    donor_email: &str,
    amount: f64,
) -> Result<i32, DbErr> {
    let txn = db.begin().await?;

    let inserted = donation::ActiveModel {
        cause_id: Set(cause_id),
        donor_name: Set(donor_name.to_string()),
        donor_email: Set(donor_email.to_string()),
        amount: Set(amount),
        donation_date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(cause_id) = cause_id {
        let update = Cause::update_many()
            .col_expr(
                cause::Column::RaisedAmount,
                Expr::col(cause::Column::RaisedAmount).add(amount),
            )
            .filter(cause::Column::Id.eq(cause_id))
            .exec(&txn)
            .await?;

        if update.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotUpdated);
        }
    }

    txn.commit().await?;
    Ok(inserted.id)
}

/// Append a contact message. A missing subject is stored as an empty string.
pub async fn add_contact_message(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    subject: Option<&str>,
    message: &str,
) -> Result<i32, DbErr> {
    let inserted = contact::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        subject: Set(Some(subject.unwrap_or("").to_string())),
        message: Set(message.to_string()),
        submission_date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(inserted.id)
}
