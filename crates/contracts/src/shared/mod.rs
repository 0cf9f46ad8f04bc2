pub mod error;

pub use error::{AdminError, AdminResult};
