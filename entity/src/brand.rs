use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brand_model::Entity")]
    BrandModel,
}

impl Related<super::brand_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
