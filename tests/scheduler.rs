//! Integration tests for the running wallpaper: ready signal, tick
//! cadence and property intake, driven by tokio's paused clock and a
//! manually stepped wall clock.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use daywall::{
    clock::ManualClock,
    config::{ScheduleConfig, WallpaperConfig},
    intake::{Inbox, PropertyEvent},
    surface::RenderSurface,
    wallpaper::{ReadyTrigger, Wallpaper, ready_signal},
};
use tokio::{task::JoinHandle, time::sleep};

fn datetime(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

struct Harness {
    clock: ManualClock,
    surface: RenderSurface,
    inbox: Inbox,
    trigger: ReadyTrigger,
    task: JoinHandle<()>,
}

fn start(at: NaiveDateTime) -> Harness {
    let clock = ManualClock::new(at);
    let wallpaper = Wallpaper::new(WallpaperConfig::default(), clock.clone()).unwrap();
    let surface = wallpaper.surface();
    let (inbox, receiver) = Inbox::channel();
    let (trigger, ready) = ready_signal();
    let task = tokio::spawn(wallpaper.run(receiver, ready));

    Harness {
        clock,
        surface,
        inbox,
        trigger,
        task,
    }
}

/// Lets every ready task run without moving time meaningfully.
async fn settle() {
    sleep(Duration::from_millis(1)).await;
}

mod startup {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn nothing_renders_before_ready() {
        let h = start(datetime(9, 0, 0));

        sleep(Duration::from_secs(3)).await;
        assert_eq!(h.surface.time_text(), None);
        assert!(h.surface.classes().is_empty());

        h.trigger.fire();
        settle().await;

        assert_eq!(h.surface.time_text().as_deref(), Some("09:00:00"));
        assert_eq!(h.surface.indicator_text().as_deref(), Some("Auto (Day)"));
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn signal_fired_before_start_runs_immediately() {
        let clock = ManualClock::new(datetime(21, 0, 0));
        let wallpaper = Wallpaper::new(WallpaperConfig::default(), clock).unwrap();
        let surface = wallpaper.surface();
        let (_inbox, receiver) = Inbox::channel();
        let (trigger, ready) = ready_signal();
        trigger.fire();

        let task = tokio::spawn(wallpaper.run(receiver, ready));
        settle().await;

        assert_eq!(surface.classes().to_string(), "theme-night theme-auto");
        task.abort();
    }
}

mod ticking {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn clock_text_follows_one_second_ticks() {
        let h = start(datetime(9, 5, 0));
        h.trigger.fire();
        settle().await;

        h.clock.set(datetime(9, 5, 1));
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(h.surface.time_text().as_deref(), Some("09:05:01"));

        h.clock.set(datetime(9, 5, 2));
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(h.surface.time_text().as_deref(), Some("09:05:02"));
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn hour_boundary_flips_auto_theme_on_tick() {
        let h = start(datetime(17, 59, 59));
        h.trigger.fire();
        settle().await;
        assert!(h.surface.classes().contains("theme-day"));

        h.clock.set(datetime(18, 0, 0));
        sleep(Duration::from_millis(1500)).await;

        assert!(h.surface.classes().contains("theme-night"));
        assert!(h.surface.classes().contains("theme-auto"));
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn indicator_refreshes_every_five_seconds() {
        let h = start(datetime(17, 59, 50));
        h.trigger.fire();
        settle().await;
        assert_eq!(h.surface.indicator_text().as_deref(), Some("Auto (Day)"));

        h.clock.set(datetime(18, 0, 30));
        sleep(Duration::from_millis(4500)).await;
        assert_eq!(h.surface.indicator_text().as_deref(), Some("Auto (Day)"));

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(h.surface.indicator_text().as_deref(), Some("Auto (Night)"));
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn custom_schedule_is_honoured() {
        let clock = ManualClock::new(datetime(8, 0, 0));
        let config = WallpaperConfig {
            schedule: ScheduleConfig {
                clock_interval_ms: 250,
                indicator_interval_ms: 500,
            },
            ..WallpaperConfig::default()
        };
        let wallpaper = Wallpaper::new(config, clock.clone()).unwrap();
        let surface = wallpaper.surface();
        let (_inbox, receiver) = Inbox::channel();
        let (trigger, ready) = ready_signal();
        let task = tokio::spawn(wallpaper.run(receiver, ready));
        trigger.fire();
        settle().await;

        clock.set(datetime(8, 0, 1));
        sleep(Duration::from_millis(300)).await;

        assert_eq!(surface.time_text().as_deref(), Some("08:00:01"));
        task.abort();
    }
}

mod intake {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn property_events_render_without_waiting_for_a_tick() {
        let h = start(datetime(12, 0, 0));
        h.trigger.fire();
        settle().await;

        h.inbox
            .deliver_json(r#"{"forcetheme":{"value":"night"},"schemecolor":{"value":"10 20 30"}}"#)
            .await
            .unwrap();
        settle().await;

        let classes = h.surface.classes();
        assert!(classes.contains("theme-night"));
        assert!(!classes.contains("theme-auto"));
        assert!(classes.contains("custom-color"));
        assert_eq!(h.surface.custom_color().as_deref(), Some("rgb(10, 20, 30)"));
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn events_queued_before_ready_apply_after_bootstrap() {
        let h = start(datetime(12, 0, 0));

        h.inbox
            .deliver(PropertyEvent::new().with("forcetheme", "night"))
            .await;
        settle().await;
        assert!(h.surface.classes().is_empty());

        h.trigger.fire();
        settle().await;

        assert_eq!(h.surface.classes().to_string(), "theme-night");
        h.task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn closed_inbox_keeps_ticking() {
        let Harness {
            clock,
            surface,
            inbox,
            trigger,
            task,
        } = start(datetime(10, 0, 0));
        trigger.fire();
        settle().await;

        drop(inbox);
        clock.set(datetime(10, 0, 1));
        sleep(Duration::from_millis(1500)).await;

        assert_eq!(surface.time_text().as_deref(), Some("10:00:01"));
        task.abort();
    }
}
