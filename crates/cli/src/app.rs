//! Command execution.
//!
//! Every command runs against a freshly built store, so nothing persists
//! between invocations. Results are rendered to a string for `main` to print.

use chrono::NaiveDate;
use serde::Serialize;

use kanbancal_core::calendar::{
    format_time_of_day, generate_events, parse_time_of_day, week_dates, DayData, Event,
    EventUpdate,
};
use kanbancal_core::gesture::{Point, SwipeDirection};
use kanbancal_core::navigation::ViewMode;
use kanbancal_core::session::CalendarSession;
use kanbancal_core::store::EventStore;

use crate::cli::events::EventsAction;
use crate::cli::gesture::GestureAction;
use crate::cli::{Commands, OutputFormat};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{pretty, render};

/// Result of `events move`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReport {
    pub event: Event,
    /// The day the event left. `None` when it was already on the target day.
    pub from: Option<DayData>,
    pub to: DayData,
}

/// Result of `gesture swipe`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeReport {
    pub started_on: NaiveDate,
    pub mode: ViewMode,
    pub direction: Option<SwipeDirection>,
    /// Live offsets reported for each intermediate sample.
    pub offsets: Vec<f64>,
    pub peek: Option<NaiveDate>,
    pub current: NaiveDate,
    pub days: Vec<DayData>,
}

/// Result of `time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    pub label: String,
    pub minutes: u16,
}

/// Runs a command and returns its rendered output.
pub fn run(
    command: Commands,
    config: &Config,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Commands::Events(cmd) => run_events(cmd.action, config, format),
        Commands::Gesture(cmd) => run_gesture(cmd.action, config, format, today),
        Commands::Time { label } => {
            let minutes = parse_time_of_day(&label)?;
            let report = TimeReport {
                label: format_time_of_day(minutes),
                minutes,
            };
            render(&report, format, pretty::format_time)
        }
    }
}

fn new_store(config: &Config) -> EventStore {
    if config.seed_data {
        EventStore::with_seed_data()
    } else {
        EventStore::new()
    }
}

fn run_events(action: EventsAction, config: &Config, format: OutputFormat) -> Result<String> {
    let mut store = new_store(config);

    match action {
        EventsAction::Generate { date } => {
            let events = generate_events(&date);
            tracing::debug!(%date, count = events.len(), "Generated events");
            render(events.as_slice(), format, pretty::format_events)
        }
        EventsAction::Day { date } => {
            let day = store.day_data(date);
            render(&day, format, pretty::format_day)
        }
        EventsAction::Week { date } => {
            let days = store.days_data(&week_dates(date.date()));
            render(days.as_slice(), format, pretty::format_week)
        }
        EventsAction::Move { id, to, from } => {
            let source = store.find(&id).map(|event| event.date_key);
            let event = store.move_event(&id, from.as_deref(), &to)?;

            let report = MoveReport {
                from: source
                    .filter(|key| *key != event.date_key)
                    .map(|key| store.day_data(key)),
                to: store.day_data(event.date_key),
                event,
            };
            render(&report, format, pretty::format_move)
        }
        EventsAction::Update {
            id,
            on,
            title,
            description,
            time,
            image_url,
        } => {
            let update = EventUpdate {
                title,
                description,
                time,
                image_url,
            };
            if update == EventUpdate::default() {
                return Err(CliError::InvalidInput("nothing to update".to_string()));
            }
            if let Some(on) = on {
                store.get_day(on);
            }

            let event = store.update_event(&id, &update)?;
            render(&event, format, pretty::format_event)
        }
    }
}

fn run_gesture(
    action: GestureAction,
    config: &Config,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String> {
    match action {
        GestureAction::Swipe {
            start,
            end,
            via,
            date,
            mode,
            threshold,
        } => {
            let mut session_config = config.session();
            if let Some(threshold) = threshold {
                if !threshold.is_finite() || threshold < 0.0 {
                    return Err(CliError::InvalidInput(format!(
                        "swipe threshold must be a non-negative number, got {threshold}"
                    )));
                }
                session_config.swipe.threshold = threshold;
            }

            let started_on = date.map(|key| key.date()).unwrap_or(today);
            let mode = ViewMode::from(mode);
            let mut session =
                CalendarSession::new(new_store(config), started_on, mode, session_config);

            let replayed = replay(&mut session, start, &via, end);
            let report = SwipeReport {
                started_on,
                mode,
                direction: replayed.direction,
                offsets: replayed.offsets,
                peek: replayed.peek,
                current: session.navigator().current(),
                days: session.visible_days(),
            };
            render(&report, format, pretty::format_swipe)
        }
    }
}

struct Replay {
    offsets: Vec<f64>,
    peek: Option<NaiveDate>,
    direction: Option<SwipeDirection>,
}

/// Feeds a touch sequence through the session.
fn replay(session: &mut CalendarSession, start: Point, via: &[Point], end: Point) -> Replay {
    let before = session.navigator().current();
    session.touch_start(start);
    let offsets = via.iter().map(|point| session.touch_move(*point)).collect();
    let peek = session.peek_date();

    // A recognized swipe moves forward on left and backward on right.
    let direction = session.touch_end(end).map(|after| {
        if after > before {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    });
    Replay {
        offsets,
        peek,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::events::EventsCommand;
    use crate::cli::gesture::{GestureCommand, Mode};
    use kanbancal_core::calendar::DateKey;
    use kanbancal_core::store::StoreError;
    use serde_json::Value;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    fn events(action: EventsAction) -> Commands {
        Commands::Events(EventsCommand { action })
    }

    fn run_json(command: Commands, config: &Config) -> Value {
        let output = run(command, config, OutputFormat::Json, today()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    fn ids(day: &Value) -> Vec<String> {
        day["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn swipe(start: (f64, f64), via: &[(f64, f64)], end: (f64, f64), mode: Mode) -> Commands {
        Commands::Gesture(GestureCommand {
            action: GestureAction::Swipe {
                start: Point::new(start.0, start.1),
                end: Point::new(end.0, end.1),
                via: via.iter().map(|(x, y)| Point::new(*x, *y)).collect(),
                date: None,
                mode,
                threshold: None,
            },
        })
    }

    #[test]
    fn test_day_uses_seed_data() {
        let day = run_json(
            events(EventsAction::Day {
                date: DateKey::parse("2025-03-16").unwrap(),
            }),
            &Config::default(),
        );

        assert_eq!(day["dateKey"], "2025-03-16");
        assert_eq!(ids(&day), vec!["event-6", "event-6a"]);
    }

    #[test]
    fn test_generate_invalid_key_is_empty() {
        let output = run(
            events(EventsAction::Generate {
                date: "not-a-date".to_string(),
            }),
            &Config::default(),
            OutputFormat::Json,
            today(),
        )
        .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_week_lists_seven_days_from_sunday() {
        let week = run_json(
            events(EventsAction::Week {
                date: DateKey::parse("2025-03-19").unwrap(),
            }),
            &Config::default(),
        );
        let days = week.as_array().unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["dateKey"], "2025-03-16");
        assert_eq!(days[6]["dateKey"], "2025-03-22");
    }

    #[test]
    fn test_move_seed_event() {
        let report = run_json(
            events(EventsAction::Move {
                id: "event-6".to_string(),
                to: "2025-03-17".to_string(),
                from: Some("2025-03-16".to_string()),
            }),
            &Config::default(),
        );

        assert_eq!(report["event"]["dateKey"], "2025-03-17");
        assert_eq!(ids(&report["from"]), vec!["event-6a"]);
        assert!(ids(&report["to"]).contains(&"event-6".to_string()));
    }

    #[test]
    fn test_move_generated_event_with_hint() {
        let config = Config {
            seed_data: false,
            ..Config::default()
        };
        let report = run_json(
            events(EventsAction::Move {
                id: "event-2025-06-02-1".to_string(),
                to: "2025-06-03".to_string(),
                from: Some("2025-06-02".to_string()),
            }),
            &config,
        );

        assert_eq!(report["event"]["dateKey"], "2025-06-03");
        assert_eq!(ids(&report["from"]), vec!["event-2025-06-02-2"]);
    }

    #[test]
    fn test_move_unknown_event() {
        let result = run(
            events(EventsAction::Move {
                id: "missing".to_string(),
                to: "2025-03-17".to_string(),
                from: None,
            }),
            &Config::default(),
            OutputFormat::Json,
            today(),
        );
        assert!(matches!(
            result,
            Err(CliError::Store(StoreError::EventNotFound { .. }))
        ));
    }

    #[test]
    fn test_update_requires_a_change() {
        let result = run(
            events(EventsAction::Update {
                id: "event-6".to_string(),
                on: None,
                title: None,
                description: None,
                time: None,
                image_url: None,
            }),
            &Config::default(),
            OutputFormat::Json,
            today(),
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_update_title() {
        let event = run_json(
            events(EventsAction::Update {
                id: "event-6".to_string(),
                on: None,
                title: Some("Kickoff (moved)".to_string()),
                description: None,
                time: None,
                image_url: None,
            }),
            &Config::default(),
        );
        assert_eq!(event["title"], "Kickoff (moved)");
        assert_eq!(event["time"], "10:00 AM");
    }

    #[test]
    fn test_left_swipe_moves_forward() {
        let report = run_json(
            swipe((100.0, 100.0), &[(40.0, 102.0)], (20.0, 105.0), Mode::Day),
            &Config::default(),
        );

        assert_eq!(report["direction"], "left");
        assert_eq!(report["current"], "2025-03-17");
        assert_eq!(report["peek"], "2025-03-17");
        assert_eq!(report["offsets"][0], -60.0);
        assert_eq!(report["days"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_vertical_drag_stays_put() {
        let report = run_json(
            swipe((100.0, 100.0), &[], (100.0, 160.0), Mode::Day),
            &Config::default(),
        );

        assert!(report["direction"].is_null());
        assert_eq!(report["current"], "2025-03-16");
    }

    #[test]
    fn test_right_swipe_in_week_mode() {
        let report = run_json(
            swipe((20.0, 100.0), &[], (100.0, 90.0), Mode::Week),
            &Config::default(),
        );

        assert_eq!(report["direction"], "right");
        assert_eq!(report["current"], "2025-03-09");
        assert_eq!(report["days"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_swipe_uses_threshold_override() {
        let command = Commands::Gesture(GestureCommand {
            action: GestureAction::Swipe {
                start: Point::new(100.0, 100.0),
                end: Point::new(130.0, 100.0),
                via: Vec::new(),
                date: None,
                mode: Mode::Day,
                threshold: Some(20.0),
            },
        });
        let report = run_json(command, &Config::default());

        assert_eq!(report["direction"], "right");
        assert_eq!(report["current"], "2025-03-15");
    }

    #[test]
    fn test_time_label() {
        let output = run(
            Commands::Time {
                label: "02:30 PM".to_string(),
            },
            &Config::default(),
            OutputFormat::Pretty,
            today(),
        )
        .unwrap();
        assert_eq!(output, "02:30 PM = 870 minutes after midnight");
    }
}
