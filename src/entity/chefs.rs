use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chefs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub fullname: String,
    pub specialization: String,
    pub pic: Option<String>,
    pub about: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
