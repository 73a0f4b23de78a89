// Seed data
// Initial lessons supplied by the view layer, as JSON or built in

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ScheduleError;
use crate::models::color::EventColor;
use crate::models::day::Day;
use crate::models::event::{Event, NewEvent};
use crate::models::time::TimeCodec;
use crate::services::schedule::ScheduleModel;

/// The five sample lessons the calendar opens with.
pub fn sample_lessons() -> Vec<NewEvent> {
    let lessons = [
        ("My Lesson", Day::Thu, "11:00 am", "12:00 pm", EventColor::BLUE),
        ("My Lesson", Day::Tue, "1:00 pm", "2:00 pm", EventColor::BLUE),
        ("My Lesson", Day::Wed, "5:00 pm", "6:00 pm", EventColor::BLUE),
        ("30min Lesson", Day::Mon, "3:00 pm", "3:30 pm", EventColor::GREEN),
        ("2hr Workshop", Day::Fri, "4:00 pm", "6:00 pm", EventColor::RED),
    ];

    lessons
        .into_iter()
        .filter_map(|(title, day, start, end, color)| {
            Some(NewEvent {
                title: title.to_string(),
                day,
                start_time: TimeCodec::parse(start).ok()?,
                end_time: TimeCodec::parse(end).ok()?,
                color: EventColor::new(color).ok()?,
            })
        })
        .collect()
}

/// Parse a JSON array of lessons.
pub fn parse_seed(json: &str) -> Result<Vec<NewEvent>> {
    serde_json::from_str(json).context("Failed to parse seed events")
}

pub fn load_seed_file(path: &Path) -> Result<Vec<NewEvent>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let drafts = parse_seed(&json)?;
    log::info!("Loaded {} seed events from {}", drafts.len(), path.display());
    Ok(drafts)
}

impl ScheduleModel {
    /// Add every draft, or none if any has an invalid interval or the id
    /// counter cannot cover them all.
    pub fn seed(&mut self, drafts: Vec<NewEvent>) -> crate::error::Result<Vec<Event>> {
        for draft in &drafts {
            draft.validate()?;
        }
        let needed = drafts.len() as u64;
        if needed > self.remaining_ids() {
            return Err(ScheduleError::out_of_range(
                "seed event count",
                i64::try_from(needed).unwrap_or(i64::MAX),
                0,
                i64::try_from(self.remaining_ids()).unwrap_or(i64::MAX),
            ));
        }
        drafts.into_iter().map(|draft| self.insert(draft)).collect()
    }

    /// Install the built-in sample lessons.
    pub fn seed_sample_lessons(&mut self) -> crate::error::Result<Vec<Event>> {
        self.seed(sample_lessons())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::TimeOfDay;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_lessons() {
        let lessons = sample_lessons();
        assert_eq!(lessons.len(), 5);
        assert_eq!(lessons[3].title, "30min Lesson");
        assert_eq!(lessons[3].start_time, TimeOfDay::from_hm(15, 0).unwrap());
        assert_eq!(lessons[4].color, EventColor::red());
    }

    #[test]
    fn test_seed_sample_lessons_assigns_ids() {
        let mut model = ScheduleModel::new();
        let events = model.seed_sample_lessons().unwrap();
        let ids: Vec<u64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(model.list_events(Some(Day::Fri)).count(), 1);
    }

    #[test]
    fn test_seed_is_all_or_nothing() {
        let json = r#"[
            {"title": "Good", "day": "MON", "startTime": "1:00 pm", "endTime": "2:00 pm"},
            {"title": "Bad", "day": "TUE", "startTime": "2:00 pm", "endTime": "1:00 pm"}
        ]"#;
        let drafts = parse_seed(json).unwrap();
        let mut model = ScheduleModel::new();

        let result = model.seed(drafts);
        assert!(matches!(result, Err(ScheduleError::InvalidInterval { .. })));
        assert!(model.is_empty());
    }

    #[test]
    fn test_seed_rejects_more_events_than_ids_left() {
        let mut model = ScheduleModel::with_next_id(u64::MAX - 1);

        let result = model.seed(sample_lessons());
        assert!(matches!(result, Err(ScheduleError::OutOfRange { .. })));
        assert!(model.is_empty());
        assert_eq!(model.next_id(), u64::MAX - 1);
    }

    #[test]
    fn test_parse_seed_rejects_bad_time() {
        let json = r#"[{"title": "x", "day": "MON", "startTime": "25:00 am", "endTime": "2:00 pm"}]"#;
        assert!(parse_seed(json).is_err());
    }

    #[test]
    fn test_load_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"title": "Cello", "day": "SAT", "startTime": "9:00 am", "endTime": "9:45 am"}]"#,
        )
        .unwrap();

        let drafts = load_seed_file(&path).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].day, Day::Sat);
    }
}
