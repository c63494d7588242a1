//! Brand fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::brand;

/// Default test brand name.
pub const DEFAULT_NAME: &str = "Toyota";

/// Creates a brand entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Toyota"`
/// - logo_path: `None`
/// - created_at / updated_at: `2025-01-01T00:00:00Z`
pub fn entity() -> brand::Model {
    entity_builder().build()
}

/// Creates a brand entity builder for customization.
pub fn entity_builder() -> BrandEntityBuilder {
    BrandEntityBuilder::default()
}

/// Builder for creating customized brand entity models.
pub struct BrandEntityBuilder {
    id: i32,
    name: String,
    logo_path: Option<String>,
    created_at: chrono::DateTime<Utc>,
}

impl Default for BrandEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            logo_path: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

impl BrandEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn logo_path(mut self, logo_path: Option<String>) -> Self {
        self.logo_path = logo_path;
        self
    }

    /// Builds and returns the brand entity model.
    pub fn build(self) -> brand::Model {
        brand::Model {
            id: self.id,
            name: self.name,
            logo_path: self.logo_path,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
