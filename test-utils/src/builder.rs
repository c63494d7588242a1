use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Brand, CategoryTag};
///
/// let test = TestBuilder::new()
///     .with_table(Brand)
///     .with_table(CategoryTag)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new builder with no tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a table to be created from the provided entity definition.
    ///
    /// Tables are created in the order they are added, so add referenced tables
    /// before the tables that reference them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the table schema from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E>(mut self, entity: E) -> Self
    where
        E: EntityTrait,
    {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(entity);

        self.tables.push(stmt);
        self
    }

    /// Adds the tagged catalog tables: Brand, BodyType, BrandModel and CategoryTag.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Brand)
            .with_table(BodyType)
            .with_table(BrandModel)
            .with_table(CategoryTag)
    }

    /// Adds the four listing tables: Car, Moto, Truck and Stock.
    pub fn with_listing_tables(self) -> Self {
        self.with_table(Car)
            .with_table(Moto)
            .with_table(Truck)
            .with_table(Stock)
    }

    /// Adds Role and AdminUser.
    pub fn with_settings_tables(self) -> Self {
        self.with_table(Role).with_table(AdminUser)
    }

    /// Adds Region, City and AutoStore.
    pub fn with_store_tables(self) -> Self {
        self.with_table(Region)
            .with_table(City)
            .with_table(AutoStore)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
