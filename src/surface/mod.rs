//! The render surface: every display region the wallpaper writes to.
//!
//! Regions are [`Property`] cells, so the styling layer can watch them as
//! streams. Each region is overwritten wholesale; there is no diffing.
//! Text nodes only exist once the page template is mounted, and writes to
//! an absent node are silently dropped.

mod class_list;
pub mod template;

pub use class_list::ClassList;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    color::ColorState,
    config::TemplateConfig,
    property::Property,
    theme::{AUTO_CLASS, ResolvedTheme, Visual},
};

/// Presence class set while a non-default accent color is active.
pub const CUSTOM_COLOR_CLASS: &str = "custom-color";

/// Name of the CSS variable carrying the accent color.
pub const CUSTOM_COLOR_VAR: &str = "--custom-color";

/// Handle to the display regions. Clones share the same regions.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    classes: Property<ClassList>,
    custom_color: Property<Option<String>>,
    markup: Property<Option<String>>,
    time_text: Property<Option<String>>,
    date_text: Property<Option<String>>,
    indicator_text: Property<Option<String>>,
}

/// Point-in-time copy of every region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    /// Class tokens on the page body.
    pub classes: Vec<String>,
    /// Value of the custom color variable, if ever set.
    pub custom_color: Option<String>,
    /// Time node text; `None` before the template is mounted.
    pub time: Option<String>,
    /// Date node text; `None` before the template is mounted.
    pub date: Option<String>,
    /// Indicator node text; `None` before the template is mounted.
    pub indicator: Option<String>,
}

impl RenderSurface {
    /// An empty surface with no template mounted.
    pub fn new() -> Self {
        Self {
            classes: Property::new(ClassList::default()),
            custom_color: Property::new(None),
            markup: Property::new(None),
            time_text: Property::new(None),
            date_text: Property::new(None),
            indicator_text: Property::new(None),
        }
    }

    /// Builds the page skeleton and creates the text nodes with their
    /// placeholder content. Returns `false` if it was already mounted.
    pub fn mount_template(&self, config: &TemplateConfig, indicator_placeholder: &str) -> bool {
        if self.is_mounted() {
            return false;
        }

        self.markup
            .set(Some(template::markup(config, indicator_placeholder)));
        self.time_text.set(Some(template::TIME_PLACEHOLDER.to_string()));
        self.date_text.set(Some(template::DATE_PLACEHOLDER.to_string()));
        self.indicator_text.set(Some(indicator_placeholder.to_string()));
        debug!("Template mounted");
        true
    }

    /// Whether the page skeleton exists.
    pub fn is_mounted(&self) -> bool {
        self.markup.with(Option::is_some)
    }

    /// Replaces the theme classes with exactly those of `theme`.
    ///
    /// The new class set is computed in full and published in one store,
    /// so observers never see a half-updated set. Unrelated classes such as
    /// the custom color flag are kept.
    pub fn write_theme(&self, theme: &ResolvedTheme) {
        let mut classes = self.classes.get();
        classes.remove(Visual::Day.class_name());
        classes.remove(Visual::Night.class_name());
        classes.remove(AUTO_CLASS);
        for token in theme.class_tokens() {
            classes.add(token);
        }
        trace!(%classes, "Theme classes written");
        self.classes.set(classes);
    }

    /// Writes the accent color variable and toggles the presence class.
    pub fn write_color(&self, color: &ColorState) {
        self.custom_color.set(Some(color.css()));

        let mut classes = self.classes.get();
        if color.is_custom {
            classes.add(CUSTOM_COLOR_CLASS);
        } else {
            classes.remove(CUSTOM_COLOR_CLASS);
        }
        self.classes.set(classes);
    }

    /// Sets the time node text, if the node exists.
    pub fn write_time(&self, text: String) {
        write_text(&self.time_text, "time", text);
    }

    /// Sets the date node text, if the node exists.
    pub fn write_date(&self, text: String) {
        write_text(&self.date_text, "date", text);
    }

    /// Sets the indicator node text, if the node exists.
    pub fn write_indicator(&self, text: String) {
        write_text(&self.indicator_text, "indicator", text);
    }

    /// Current body classes.
    pub fn classes(&self) -> ClassList {
        self.classes.get()
    }

    /// Current custom color variable value.
    pub fn custom_color(&self) -> Option<String> {
        self.custom_color.get()
    }

    /// Page skeleton markup, once mounted.
    pub fn markup(&self) -> Option<String> {
        self.markup.get()
    }

    /// Current time text.
    pub fn time_text(&self) -> Option<String> {
        self.time_text.get()
    }

    /// Current date text.
    pub fn date_text(&self) -> Option<String> {
        self.date_text.get()
    }

    /// Current indicator text.
    pub fn indicator_text(&self) -> Option<String> {
        self.indicator_text.get()
    }

    /// Copies every region.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            classes: self.classes.with(|c| c.iter().map(str::to_string).collect()),
            custom_color: self.custom_color(),
            time: self.time_text(),
            date: self.date_text(),
            indicator: self.indicator_text(),
        }
    }

    /// Streams of every region merged into one change signal.
    ///
    /// Yields once per region on subscription, then on every change.
    pub fn changes(&self) -> impl futures::Stream<Item = ()> + Send + use<> {
        use futures::StreamExt;

        futures::stream::select_all([
            self.classes.watch().map(|_| ()).boxed(),
            self.custom_color.watch().map(|_| ()).boxed(),
            self.time_text.watch().map(|_| ()).boxed(),
            self.date_text.watch().map(|_| ()).boxed(),
            self.indicator_text.watch().map(|_| ()).boxed(),
        ])
    }
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn write_text(node: &Property<Option<String>>, name: &str, text: String) {
    if node.with(Option::is_none) {
        trace!(node = name, "Node absent, skipping write");
        return;
    }
    node.set(Some(text));
}
