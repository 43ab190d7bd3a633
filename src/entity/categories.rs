use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meals::Entity")]
    Meals,
}

impl Related<super::meals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
