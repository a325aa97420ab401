// Service exports
pub mod catalog;
pub mod community;
pub mod preferences;

pub use catalog::{Catalog, CatalogError, seed_shared_files};
pub use community::{CommunityHub, CommunityError, FileTab, FileUpload};
pub use preferences::Preferences;
