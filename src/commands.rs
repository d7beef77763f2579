use crate::dates::date_key;
use crate::errors::ValidationError;
use crate::models::{AppData, Goal, GoalKind, GroupedGoal, Habit, HabitKind, NewGroupedGoal, NewHabit};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Flips the completion flag for the given calendar day. A day that was
/// never marked counts as incomplete, so the first toggle sets it.
pub fn toggle_completion(
    data: &mut AppData,
    habit_id: &str,
    day: NaiveDate,
) -> Result<Habit, ValidationError> {
    let habit = data
        .habits
        .iter_mut()
        .find(|habit| habit.id == habit_id)
        .ok_or_else(|| ValidationError::UnknownHabit(habit_id.to_string()))?;

    let key = date_key(day);
    let completed = !habit.is_completed(&key);
    habit.completions.insert(key, completed);
    Ok(habit.clone())
}

pub fn create_habit(data: &mut AppData, new: NewHabit) -> Result<Habit, ValidationError> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let scheduled_time = if new.scheduled {
        match new.scheduled_time.as_deref().map(str::trim) {
            Some(time) if !time.is_empty() => Some(time.to_string()),
            _ => return Err(ValidationError::MissingScheduledTime),
        }
    } else {
        None
    };

    let mut goals: Vec<Goal> = Vec::with_capacity(new.goals.len());
    for goal in &new.goals {
        if goal.target == 0 {
            return Err(ValidationError::NonPositiveTarget(goal.kind));
        }
        if goals.iter().any(|existing| existing.kind() == goal.kind) {
            return Err(ValidationError::DuplicateGoal(goal.kind));
        }
        goals.push(match goal.kind {
            GoalKind::Weekly => Goal::Weekly { target: goal.target },
            GoalKind::Streak => Goal::Streak { target: goal.target, best: 0 },
            GoalKind::Monthly => Goal::Monthly { target: goal.target },
        });
    }

    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        emoji: normalize(new.emoji),
        kind: new.kind,
        scheduled_time,
        goals,
        completions: BTreeMap::new(),
    };
    data.habits.push(habit.clone());
    Ok(habit)
}

pub fn create_grouped_goal(
    data: &mut AppData,
    new: NewGroupedGoal,
) -> Result<GroupedGoal, ValidationError> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if new.target == 0 {
        return Err(ValidationError::NonPositiveGroupTarget);
    }

    let mut habit_ids: Vec<String> = Vec::with_capacity(new.habit_ids.len());
    for id in new.habit_ids {
        if habit_ids.contains(&id) {
            continue;
        }
        match data.habits.iter().find(|habit| habit.id == id) {
            Some(habit) if habit.kind == HabitKind::Daily => habit_ids.push(id),
            Some(_) => return Err(ValidationError::NotDailyHabit(id)),
            None => return Err(ValidationError::UnknownHabit(id)),
        }
    }
    if habit_ids.len() < 2 {
        return Err(ValidationError::TooFewMembers);
    }

    let group = GroupedGoal {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        emoji: normalize(new.emoji),
        kind: new.kind,
        habit_ids,
        period: new.period,
        target: new.target,
    };
    data.groups.push(group.clone());
    Ok(group)
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
