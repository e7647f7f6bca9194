use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Course, Student};
///
/// let test = TestBuilder::new()
///     .with_table(Course)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the course, student and user tables.
    ///
    /// Enough for authentication, roster and account tests.
    pub fn with_roster_tables(self) -> Self {
        self.with_table(Course).with_table(Student).with_table(User)
    }

    /// Adds every table of the school schema in dependency order:
    /// - Course
    /// - Student
    /// - User
    /// - Grade
    /// - Attendance
    /// - Observation
    /// - Message
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_school_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_school_tables(self) -> Self {
        self.with_roster_tables()
            .with_table(Grade)
            .with_table(Attendance)
            .with_table(Observation)
            .with_table(Message)
            .with_natural_key_indexes()
    }

    /// Adds the unique indexes the migrations put on the grade and attendance natural keys.
    ///
    /// Entity-derived tables carry no composite indexes.
    pub fn with_natural_key_indexes(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx_calificaciones_unique")
                .table(Grade)
                .col(entity::grade::Column::StudentId)
                .col(entity::grade::Column::Subject)
                .col(entity::grade::Column::Period)
                .unique()
                .to_owned(),
        );
        self.indexes.push(
            Index::create()
                .name("idx_asistencia_unique")
                .table(Attendance)
                .col(entity::attendance::Column::StudentId)
                .col(entity::attendance::Column::Date)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
