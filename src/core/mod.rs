//! Core module - storage, records and view state

pub mod config;
pub mod entity;
pub mod filter;
pub mod identity;
pub mod money;
pub mod repository;
pub mod rotation;
pub mod seed;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use entity::{Collection, Record, RecordError};
pub use filter::{brand_options, category_options, InventoryFilter, Selection};
pub use identity::{new_record_id, resolve, IdLookupError};
pub use money::{format_mileage, Currency};
pub use repository::{Repository, RepositoryError};
pub use rotation::{HeroCarousel, RotationError, RotationTimer, ROTATION_INTERVAL};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use workspace::{Workspace, WorkspaceError};
