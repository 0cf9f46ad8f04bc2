pub mod aggregate;
pub mod store;

pub use aggregate::{Package, PackageId};
pub use store::PackageCatalog;
