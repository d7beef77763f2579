use crate::errors::{AppError, StoreError};
use crate::models::{AppData, Goal, GroupKind, GroupedGoal, Habit, HabitKind, Period};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::info;

const HABITS_SLOT: &str = "habits.json";
const GROUPS_SLOT: &str = "grouped_goals.json";

pub fn resolve_data_dir() -> PathBuf {
    env::var("HABIT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Reads both store slots. A missing slot seeds the sample dataset in memory
/// only; nothing is written until the first mutation. A slot that exists but
/// fails to parse aborts startup.
pub async fn load_store(dir: &Path) -> Result<AppData, StoreError> {
    let habits = match read_slot::<Vec<Habit>>(&dir.join(HABITS_SLOT), HABITS_SLOT).await? {
        Some(habits) => habits,
        None => {
            info!("no stored habits, starting from the sample set");
            seed_habits()
        }
    };
    let groups = match read_slot::<Vec<GroupedGoal>>(&dir.join(GROUPS_SLOT), GROUPS_SLOT).await? {
        Some(groups) => groups,
        None => seed_groups(),
    };
    Ok(AppData { habits, groups })
}

/// Full write-through of both collections, called after every mutation.
pub async fn persist_store(dir: &Path, data: &AppData) -> Result<(), AppError> {
    write_slot(&dir.join(HABITS_SLOT), &data.habits).await?;
    write_slot(&dir.join(GROUPS_SLOT), &data.groups).await
}

async fn read_slot<T: DeserializeOwned>(
    path: &Path,
    slot: &'static str,
) -> Result<Option<T>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => {
            let value = serde_json::from_slice(&bytes)
                .map_err(|source| StoreError::Malformed { slot, source })?;
            Ok(Some(value))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StoreError::Io(err)),
    }
}

async fn write_slot<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub fn seed_habits() -> Vec<Habit> {
    vec![
        sample_habit("habit-1", "Code", "💻", Some("20:30"), vec![Goal::Weekly { target: 5 }]),
        sample_habit("habit-2", "Workout", "💪", Some("07:00"), vec![Goal::Weekly { target: 5 }]),
        sample_habit("habit-3", "Avoid Vaping", "🚫", None, vec![Goal::Streak { target: 30, best: 0 }]),
        sample_habit("habit-4", "Read the Bible", "📖", Some("21:00"), vec![]),
        sample_habit("habit-5", "Music", "🎵", None, vec![]),
        sample_habit("habit-6", "Writing", "✍️", None, vec![]),
        sample_habit("habit-7", "Painting", "🎨", None, vec![]),
        sample_habit("habit-8", "Drawing", "✏️", None, vec![]),
    ]
}

pub fn seed_groups() -> Vec<GroupedGoal> {
    vec![
        GroupedGoal {
            id: "group-1".to_string(),
            name: "Creative Goal".to_string(),
            emoji: Some("🎨".to_string()),
            kind: GroupKind::Aggregate,
            habit_ids: vec![
                "habit-5".to_string(),
                "habit-6".to_string(),
                "habit-7".to_string(),
                "habit-8".to_string(),
            ],
            period: Period::Week,
            target: 5,
        },
        GroupedGoal {
            id: "group-2".to_string(),
            name: "Health & Spirit".to_string(),
            emoji: Some("💪".to_string()),
            kind: GroupKind::Combined,
            habit_ids: vec!["habit-2".to_string(), "habit-4".to_string()],
            period: Period::Week,
            target: 3,
        },
    ]
}

fn sample_habit(
    id: &str,
    name: &str,
    emoji: &str,
    scheduled_time: Option<&str>,
    goals: Vec<Goal>,
) -> Habit {
    Habit {
        id: id.to_string(),
        name: name.to_string(),
        emoji: Some(emoji.to_string()),
        kind: HabitKind::Daily,
        scheduled_time: scheduled_time.map(str::to_string),
        goals,
        completions: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::date_key;
    use chrono::NaiveDate;

    fn unique_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_store_{}_{}", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn missing_slots_seed_samples_without_writing() {
        let dir = unique_dir();
        let data = load_store(&dir).await.unwrap();
        assert_eq!(data.habits.len(), 8);
        assert_eq!(data.groups.len(), 2);
        assert!(!dir.join(HABITS_SLOT).exists());
        assert!(!dir.join(GROUPS_SLOT).exists());
    }

    #[tokio::test]
    async fn round_trip_preserves_both_collections() {
        let dir = unique_dir();
        fs::create_dir_all(&dir).await.unwrap();

        let mut data = AppData {
            habits: seed_habits(),
            groups: seed_groups(),
        };
        let day = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        data.habits[0].completions.insert(date_key(day), true);
        data.habits[1].completions.insert(date_key(day), false);

        persist_store(&dir, &data).await.unwrap();
        let loaded = load_store(&dir).await.unwrap();
        assert_eq!(loaded, data);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn malformed_slot_fails_fast() {
        let dir = unique_dir();
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(dir.join(HABITS_SLOT), b"not json").await.unwrap();

        let err = load_store(&dir).await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { slot, .. } if slot == HABITS_SLOT));

        let _ = fs::remove_dir_all(&dir).await;
    }
}
