pub use crate::id::Id;
pub use crate::time::Timestamp;
