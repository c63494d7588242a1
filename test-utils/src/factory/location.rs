use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a region with unique names in all three languages.
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    let id = next_id();
    entity::region::ActiveModel {
        id: ActiveValue::NotSet,
        name_tm: ActiveValue::Set(format!("Welayat {}", id)),
        name_en: ActiveValue::Set(format!("Region {}", id)),
        name_ru: ActiveValue::Set(format!("Oblast {}", id)),
    }
    .insert(db)
    .await
}

/// Creates a city inside the given region.
pub async fn create_city(
    db: &DatabaseConnection,
    region_id: i32,
) -> Result<entity::city::Model, DbErr> {
    let id = next_id();
    entity::city::ActiveModel {
        id: ActiveValue::NotSet,
        region_id: ActiveValue::Set(region_id),
        name_tm: ActiveValue::Set(format!("Shaher {}", id)),
        name_en: ActiveValue::Set(format!("City {}", id)),
        name_ru: ActiveValue::Set(format!("Gorod {}", id)),
    }
    .insert(db)
    .await
}
