//! The wallpaper controller.
//!
//! [`Wallpaper`] owns the mutable state (theme mode and accent color), the
//! render surface and the clock. All writes happen through `&mut self` on a
//! single task, so a state change and its render always complete before the
//! next scheduled tick gets to run.

mod ready;
mod scheduler;

pub use ready::{ReadySignal, ReadyTrigger, ready_signal};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    clock::{ClockSnapshot, ClockSource},
    color::ColorState,
    config::WallpaperConfig,
    intake::PropertyEvent,
    surface::RenderSurface,
    theme::{self, ResolvedTheme, ThemeMode},
};

/// State the host can change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WallpaperState {
    /// User-selected theme mode.
    pub mode: ThemeMode,
    /// Last accent color applied.
    pub color: ColorState,
}

/// Drives the render surface from host properties and the clock.
pub struct Wallpaper {
    state: WallpaperState,
    surface: RenderSurface,
    clock: Box<dyn ClockSource>,
    config: WallpaperConfig,
    initialized: bool,
}

impl Wallpaper {
    /// Creates a wallpaper that has not yet built its page.
    ///
    /// # Errors
    /// Returns `ConfigValidation` if the daylight window or tick periods in
    /// `config` are unusable
    pub fn new(config: WallpaperConfig, clock: impl ClockSource + 'static) -> Result<Self> {
        config.validate()?;

        let state = WallpaperState {
            mode: ThemeMode::parse(&config.initial_theme),
            color: ColorState::default(),
        };

        Ok(Self {
            state,
            surface: RenderSurface::new(),
            clock: Box::new(clock),
            config,
            initialized: false,
        })
    }

    /// A handle to the display regions, for observers.
    pub fn surface(&self) -> RenderSurface {
        self.surface.clone()
    }

    /// Current mode and color.
    pub fn state(&self) -> &WallpaperState {
        &self.state
    }

    /// One-time startup: builds the page and paints it.
    ///
    /// Resolves the theme and runs one full clock and indicator refresh so
    /// the first frame is never blank. Later calls do nothing and return
    /// `false`.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            debug!("Already initialized, ignoring");
            return false;
        }
        self.initialized = true;

        self.surface
            .mount_template(&self.config.template, &self.config.labels.auto);

        if let Some(color) = self.config.scheme_color.clone() {
            self.apply_color(&color);
        }

        self.apply_theme();
        self.tick_clock();
        self.refresh_indicator();

        info!(mode = %self.state.mode, "Wallpaper initialized");
        true
    }

    /// Resolves the current mode against the clock and rewrites the theme
    /// classes. Safe to repeat: identical inputs give an identical surface.
    #[instrument(skip(self), fields(mode = %self.state.mode))]
    pub fn apply_theme(&self) -> ResolvedTheme {
        let now = self.clock.now();
        let resolved = theme::resolve(&self.state.mode, &now, &self.config.daylight);
        self.surface.write_theme(&resolved);
        debug!(visual = ?resolved.visual, auto = resolved.is_auto_derived, "Theme applied");
        resolved
    }

    /// Switches mode and re-renders the theme immediately.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ResolvedTheme {
        info!(from = %self.state.mode, to = %mode, "Theme mode changed");
        self.state.mode = mode;
        self.apply_theme()
    }

    /// Parses a `"R G B"` accent color and writes it to the surface.
    #[instrument(skip(self))]
    pub fn apply_color(&mut self, input: &str) -> ColorState {
        let color = ColorState::parse(input);
        self.state.color = color;
        self.surface.write_color(&color);
        info!(css = %color.css(), custom = color.is_custom, "Accent color applied");
        color
    }

    /// The one-second tick: refreshes time and date text.
    ///
    /// In automatic mode a tick landing exactly on the top of the hour also
    /// re-resolves the theme, catching the day/night boundary without
    /// resolving every second.
    pub fn tick_clock(&mut self) -> ClockSnapshot {
        let now = self.clock.now();

        self.surface.write_time(now.format_time());
        self.surface
            .write_date(now.format_date(&self.config.labels.weekdays));

        if self.state.mode.is_auto() && now.is_top_of_hour() {
            debug!(hour = now.hour, "Top of the hour, re-resolving theme");
            self.apply_theme();
        }

        now
    }

    /// The indicator tick: recomputes the label from mode and live hour.
    pub fn refresh_indicator(&self) -> String {
        let hour = self.clock.now().hour;
        let label = theme::indicator_label(
            &self.state.mode,
            hour,
            &self.config.daylight,
            &self.config.labels,
        );
        self.surface.write_indicator(label.clone());
        label
    }

    /// Applies a batch of host properties.
    ///
    /// Each recognized property is handled on its own, theme first, and
    /// renders immediately; nothing is batched.
    #[instrument(skip_all)]
    pub fn on_properties_updated(&mut self, event: &PropertyEvent) {
        debug!(?event, "Properties updated");

        if let Some(value) = event.force_theme() {
            self.set_mode(ThemeMode::parse(value));
        }

        if let Some(value) = event.scheme_color() {
            self.apply_color(value);
        }

        for key in event.unrecognized_keys() {
            debug!(key, "Ignoring unrecognized property");
        }
    }
}

impl std::fmt::Debug for Wallpaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallpaper")
            .field("state", &self.state)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
