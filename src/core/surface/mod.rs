//! Editor Surface
//!
//! The live grid the user edits, and the manager that applies structural
//! changes to it. The surface is authoritative: the table model is a
//! snapshot read back from it after every change.
//!
//! # Architecture
//!
//! ```text
//! user action -> SurfaceManager -> Surface (arena of cells) -> TableModel
//! ```
//!
//! # Example
//!
//! ```
//! use tablecraft::core::surface::SurfaceManager;
//!
//! let mut manager = SurfaceManager::new();
//! manager.create_surface(3, 2);
//! manager.add_column();
//!
//! let model = manager.derive_model();
//! assert_eq!(model.row_count(), 3);
//! assert_eq!(model.cell(0, 2), "Header 3");
//! ```

mod grid;
mod manager;

#[cfg(test)]
mod tests;

// Re-export public API
pub use grid::{CellId, CellKind, CellNode, Surface};
pub use manager::{Populated, SurfaceManager};
