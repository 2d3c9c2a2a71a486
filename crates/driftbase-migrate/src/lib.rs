pub mod changeset;
pub mod checksum;
pub mod context;
pub mod errors;
pub mod history;
pub mod model;
pub mod prelude;
pub mod schema;

#[cfg(feature = "memory")]
pub mod memory;

pub use errors::MigrateError;
pub use model::*;
pub use schema::Schema;
