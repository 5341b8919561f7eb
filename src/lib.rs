//! parallelchat-icons: procedural app icon generator
//!
//! Draws the ParallelChat icon (four colored chat panels on a rounded purple
//! tile) at any size and exports it as PNG files and a multi-resolution
//! Windows ICO.
//!
//! # Example
//!
//! ```
//! use parallelchat_icons::{IconRenderer, encode_ico, encode_png};
//!
//! let renderer = IconRenderer::new();
//!
//! let png = encode_png(&renderer.render(32).unwrap()).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//!
//! let frames = renderer.render_set(&[32, 16]).unwrap();
//! assert_eq!(frames.sizes(), vec![16, 32]);
//! let ico = encode_ico(&frames).unwrap();
//! ```
//!
//! # Writing the asset tree
//!
//! ```no_run
//! use parallelchat_icons::{GeneratorConfig, generate};
//!
//! let report = generate(&GeneratorConfig::with_root("/path/to/project")).unwrap();
//! for path in &report.written {
//!     println!("{}", path.display());
//! }
//! ```

mod config;
pub mod design;
mod driver;
mod error;
mod export;
mod icon;
mod render;

pub use config::{DEFAULT_ICO_SIZES, DEFAULT_SIZES, GeneratorConfig};
pub use design::{Fill, PanelSpec, Scale};
pub use driver::{GenerationReport, generate, iconset_instructions};
pub use error::IconError;
pub use export::{encode_ico, encode_png};
pub use icon::{IconImage, IconSet, RectPx};
pub use render::{IconRenderer, Scene, Shape, render};
