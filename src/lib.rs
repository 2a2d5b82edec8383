//! Daywall - a live clock wallpaper with a day/night theme.
//!
//! Daywall keeps a small set of display regions (theme classes, time, date,
//! theme indicator and an accent color variable) in step with the clock and
//! with properties pushed by a host application:
//!
//! - The theme is forced to day or night, or derived from the hour
//! - Time and date refresh every second
//! - The theme indicator refreshes every five seconds
//! - Accent color updates arrive as `"R G B"` strings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daywall::{
//!     clock::SystemClock,
//!     config::WallpaperConfig,
//!     intake::{Inbox, PropertyEvent},
//!     wallpaper::{ReadySignal, Wallpaper},
//! };
//!
//! # async fn demo() -> daywall::Result<()> {
//! let wallpaper = Wallpaper::new(WallpaperConfig::default(), SystemClock)?;
//! let surface = wallpaper.surface();
//! let (inbox, receiver) = Inbox::channel();
//!
//! tokio::spawn(wallpaper.run(receiver, ReadySignal::fired()));
//! inbox.deliver(PropertyEvent::new().with("forcetheme", "night")).await;
//!
//! println!("{:?}", surface.snapshot());
//! # Ok(())
//! # }
//! ```

/// Clock snapshots and time sources.
pub mod clock;

/// Accent color parsing.
pub mod color;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Host property events and the inbox they travel through.
pub mod intake;

/// Watchable value cells.
pub mod property;

/// Display regions written by the wallpaper.
pub mod surface;

/// Theme mode resolution and indicator labels.
pub mod theme;

/// Logging setup.
pub mod tracing_config;

/// The controller and its scheduler.
pub mod wallpaper;

/// Re-exported core types for convenience.
pub use crate::core::{DaywallError, Result};
