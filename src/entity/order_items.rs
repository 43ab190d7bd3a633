use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub meal_id: i64,
    pub quantity: i32,
    /// Cents; copied from the catalog at order time so historical orders
    /// are insulated from price changes.
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::meals::Entity",
        from = "Column::MealId",
        to = "super::meals::Column::Id"
    )]
    Meals,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::meals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
