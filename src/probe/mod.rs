//! Extension directory probing.
//!
//! A probe run walks the layout
//! `<custom>/<extension>/dist/nodes/<Module>/<Module>.node.js` for every
//! configured extension, stopping at the first missing level, and loads
//! the module file when it is present.
//!
//! - [`parse_extension_list`] - Split the configured list into names
//! - [`ExtensionLayout`] - Paths checked for one extension
//! - [`DirectoryProber`] - Gathers a [`ProbeReport`]
//! - [`render_report`] - Writes a report through a [`UserInterface`](crate::ui::UserInterface)

pub mod extensions;
pub mod layout;
pub mod prober;
pub mod render;
pub mod report;

pub use extensions::parse_extension_list;
pub use layout::ExtensionLayout;
pub use prober::DirectoryProber;
pub use render::render_report;
pub use report::{ExtensionReport, FileCheck, Level, LevelCheck, Listing, ProbeReport};
