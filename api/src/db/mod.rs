// Database access layer for the asset manager API

mod error;
pub mod filter;
mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::Repositories;
