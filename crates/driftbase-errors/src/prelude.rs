pub use crate::codes;
pub use crate::model::{ErrorBuilder, ErrorObj};
pub use crate::retry::RetryClass;
