//! Domain Layer
//!
//! Publishing rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - AssetFile, UploadResult
//! - `value_objects/` - DestinationKey, ObjectAcl, ObjectHeaders
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
