//! Configuration properties pushed by the host.
//!
//! The host delivers a mapping of property name to `{ "value": ... }`.
//! Events are queued through an [`Inbox`] and applied by the wallpaper
//! between ticks, one at a time, each with its own immediate render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::{DaywallError, Result};

/// Property key carrying the theme override.
pub const FORCE_THEME: &str = "forcetheme";

/// Property key carrying the accent color.
pub const SCHEME_COLOR: &str = "schemecolor";

/// Queue depth between host and wallpaper.
const INBOX_CAPACITY: usize = 32;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Raw value as the host sent it.
    pub value: String,
}

/// One batch of property updates from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyEvent(BTreeMap<String, PropertyValue>);

impl PropertyEvent {
    /// An event with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, builder style.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(
            key.to_string(),
            PropertyValue {
                value: value.to_string(),
            },
        );
        self
    }

    /// Decodes the host's JSON form, e.g. `{"forcetheme":{"value":"night"}}`.
    ///
    /// # Errors
    /// Returns `EventParse` if the text is not a JSON object of that shape
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DaywallError::EventParse {
            details: e.to_string(),
        })
    }

    /// The theme override value, if present.
    pub fn force_theme(&self) -> Option<&str> {
        self.get(FORCE_THEME)
    }

    /// The accent color value, if present.
    pub fn scheme_color(&self) -> Option<&str> {
        self.get(SCHEME_COLOR)
    }

    /// Raw value of any property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|p| p.value.as_str())
    }

    /// Property names this wallpaper does not act on.
    pub fn unrecognized_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| *key != FORCE_THEME && *key != SCHEME_COLOR)
    }
}

/// Sending half of the wallpaper's property queue.
#[derive(Debug, Clone)]
pub struct Inbox {
    tx: mpsc::Sender<PropertyEvent>,
}

/// Receiving half, owned by the running wallpaper.
pub type InboxReceiver = mpsc::Receiver<PropertyEvent>;

impl Inbox {
    /// Creates a connected inbox pair.
    pub fn channel() -> (Self, InboxReceiver) {
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        (Self { tx }, rx)
    }

    /// Queues an event, waiting for space if the queue is full.
    ///
    /// Returns `false` once the wallpaper has stopped receiving.
    pub async fn deliver(&self, event: PropertyEvent) -> bool {
        if self.tx.send(event).await.is_err() {
            warn!("Wallpaper inbox closed, dropping property event");
            return false;
        }
        true
    }

    /// Decodes and queues a JSON event.
    ///
    /// # Errors
    /// Returns `EventParse` if the JSON is malformed
    pub async fn deliver_json(&self, text: &str) -> Result<bool> {
        let event = PropertyEvent::from_json(text)?;
        Ok(self.deliver(event).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_host_json() {
        let event = PropertyEvent::from_json(
            r#"{"forcetheme":{"value":"night"},"schemecolor":{"value":"10 20 30"}}"#,
        )
        .unwrap();

        assert_eq!(event.force_theme(), Some("night"));
        assert_eq!(event.scheme_color(), Some("10 20 30"));
        assert_eq!(event.unrecognized_keys().count(), 0);
    }

    #[test]
    fn unknown_keys_are_kept_but_flagged() {
        let event = PropertyEvent::from_json(r#"{"fps":{"value":"30"}}"#).unwrap();

        assert_eq!(event.force_theme(), None);
        assert_eq!(event.unrecognized_keys().collect::<Vec<_>>(), vec!["fps"]);
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = PropertyEvent::from_json(r#"{"forcetheme":"night"}"#).unwrap_err();

        assert!(matches!(err, DaywallError::EventParse { .. }));
    }

    #[tokio::test]
    async fn inbox_delivers_in_order() {
        let (inbox, mut rx) = Inbox::channel();

        assert!(inbox.deliver(PropertyEvent::new().with(FORCE_THEME, "day")).await);
        assert!(inbox.deliver_json(r#"{"forcetheme":{"value":"night"}}"#).await.unwrap());

        assert_eq!(rx.recv().await.unwrap().force_theme(), Some("day"));
        assert_eq!(rx.recv().await.unwrap().force_theme(), Some("night"));
    }

    #[tokio::test]
    async fn deliver_after_close_reports_false() {
        let (inbox, rx) = Inbox::channel();
        drop(rx);

        assert!(!inbox.deliver(PropertyEvent::new()).await);
    }
}
