// Database repository management

mod asset_repository;

pub use asset_repository::AssetRepository;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
pub struct Repositories {
    pub assets: AssetRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            assets: AssetRepository::new(conn),
        }
    }
}
