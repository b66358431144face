use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A single contribution. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    /// None for general-fund donations.
    pub cause_id: Option<i32>,
    pub donor_name: String,
    pub donor_email: String,
    pub amount: f64,
    pub donation_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cause::Entity",
        from = "Column::CauseId",
        to = "super::cause::Column::Id"
    )]
    Cause,
}

impl Related<super::cause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cause.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
