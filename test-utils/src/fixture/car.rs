//! Car listing fixtures.

use chrono::Utc;
use entity::car;

/// Default owner of fixture listings.
pub const DEFAULT_USER_ID: i64 = 1;

/// Creates a pending car entity model owned by `DEFAULT_USER_ID`.
pub fn entity() -> car::Model {
    let now = Utc::now();
    car::Model {
        id: 1,
        user_id: DEFAULT_USER_ID,
        status: "pending".to_string(),
        brand_id: None,
        model_id: None,
        year: 2020,
        price: 15_000,
        vin: None,
        description: None,
        created_at: now,
        updated_at: now,
    }
}
