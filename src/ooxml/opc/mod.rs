/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the subset of the OPC specification needed to write
/// and read back a presentation package:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgreader::PackageReader;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
