use crate::dates::{date_key, days_between, start_of_month, start_of_week};
use crate::models::{
    AppData, Goal, GoalKind, GoalProgress, GroupCard, GroupKind, GroupMemberCard, GroupedGoal,
    Habit, HabitCard, OverviewResponse, Period,
};
use chrono::{Duration, NaiveDate};
use tracing::warn;

pub fn weekly_progress(habit: &Habit, as_of: NaiveDate) -> u32 {
    completed_days(habit, start_of_week(as_of), as_of)
}

pub fn monthly_progress(habit: &Habit, as_of: NaiveDate) -> u32 {
    completed_days(habit, start_of_month(as_of), as_of)
}

fn completed_days(habit: &Habit, start: NaiveDate, end: NaiveDate) -> u32 {
    days_between(start, end)
        .into_iter()
        .filter(|day| habit.is_completed(&date_key(*day)))
        .count() as u32
}

/// Backward consecutive-day streak anchored at the real current day, never
/// at a navigated as-of date. A completion yesterday keeps the streak alive
/// while today is still open.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let start = if habit.is_completed(&date_key(today)) {
        today
    } else if habit.is_completed(&date_key(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut count = 0;
    let mut day = start;
    while habit.is_completed(&date_key(day)) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}

pub fn group_progress(
    group: &GroupedGoal,
    habits: &[Habit],
    as_of: NaiveDate,
    today: NaiveDate,
) -> u32 {
    let members = member_habits(group, habits);
    match group.kind {
        GroupKind::Aggregate => window_days(group.period, as_of)
            .into_iter()
            .map(|day| {
                let key = date_key(day);
                members.iter().filter(|habit| habit.is_completed(&key)).count() as u32
            })
            .sum(),
        GroupKind::Combined => window_days(group.period, as_of)
            .into_iter()
            .filter(|day| {
                let key = date_key(*day);
                members.iter().all(|habit| habit.is_completed(&key))
            })
            .count() as u32,
        GroupKind::MutualExclusion => exclusion_streak(&members, today),
    }
}

/// `target` must be positive; creation validation enforces it.
pub fn progress_percentage(current: u32, target: u32) -> f64 {
    ((current as f64 / target as f64) * 100.0).min(100.0)
}

pub fn window_days(period: Period, as_of: NaiveDate) -> Vec<NaiveDate> {
    let start = match period {
        Period::Week => start_of_week(as_of),
        Period::Month => start_of_month(as_of),
    };
    days_between(start, as_of)
}

fn member_habits<'a>(group: &GroupedGoal, habits: &'a [Habit]) -> Vec<&'a Habit> {
    group
        .habit_ids
        .iter()
        .filter_map(|id| habits.iter().find(|habit| habit.id == *id))
        .collect()
}

/// Streak of days with no member completion, counted back from today with no
/// yesterday fallback: a completion today ends it at 0. The walk is bounded
/// by the earliest recorded member completion; without one on or before
/// today there is nothing to count against and the streak is 0.
fn exclusion_streak(members: &[&Habit], today: NaiveDate) -> u32 {
    let Some(first_key) = members
        .iter()
        .flat_map(|habit| habit.completions.iter())
        .filter(|(_, completed)| **completed)
        .map(|(key, _)| key.as_str())
        .min()
    else {
        return 0;
    };

    let mut count = 0;
    let mut day = today;
    loop {
        let key = date_key(day);
        if key.as_str() < first_key {
            break;
        }
        if members.iter().any(|habit| habit.is_completed(&key)) {
            break;
        }
        count += 1;
        day -= Duration::days(1);
    }
    count
}

pub fn build_overview(data: &AppData, as_of: NaiveDate, today: NaiveDate) -> OverviewResponse {
    OverviewResponse {
        date: as_of.to_string(),
        today: as_of == today,
        habits: data
            .habits
            .iter()
            .map(|habit| habit_card(habit, as_of, today))
            .collect(),
        groups: data
            .groups
            .iter()
            .map(|group| group_card(group, &data.habits, as_of, today))
            .collect(),
    }
}

pub fn habit_card(habit: &Habit, as_of: NaiveDate, today: NaiveDate) -> HabitCard {
    let goals = habit
        .goals
        .iter()
        .map(|goal| {
            let (kind, current, target) = match goal {
                Goal::Weekly { target } => (GoalKind::Weekly, weekly_progress(habit, as_of), *target),
                Goal::Streak { target, .. } => (GoalKind::Streak, streak(habit, today), *target),
                Goal::Monthly { target } => (GoalKind::Monthly, monthly_progress(habit, as_of), *target),
            };
            GoalProgress {
                kind,
                current,
                target,
                percentage: progress_percentage(current, target),
            }
        })
        .collect();

    HabitCard {
        id: habit.id.clone(),
        name: habit.name.clone(),
        emoji: habit.emoji.clone(),
        kind: habit.kind,
        scheduled_time: habit.scheduled_time.clone(),
        completed: habit.is_completed(&date_key(as_of)),
        goals,
    }
}

pub fn group_card(
    group: &GroupedGoal,
    habits: &[Habit],
    as_of: NaiveDate,
    today: NaiveDate,
) -> GroupCard {
    for id in &group.habit_ids {
        if !habits.iter().any(|habit| habit.id == *id) {
            warn!(group = %group.id, habit = %id, "group references an unknown habit, skipping it");
        }
    }

    let window = window_days(group.period, as_of);
    let as_of_key = date_key(as_of);
    let members = member_habits(group, habits)
        .into_iter()
        .map(|habit| GroupMemberCard {
            id: habit.id.clone(),
            name: habit.name.clone(),
            emoji: habit.emoji.clone(),
            completed: habit.is_completed(&as_of_key),
            completed_days: window
                .iter()
                .filter(|day| habit.is_completed(&date_key(**day)))
                .map(|day| day.to_string())
                .collect(),
        })
        .collect();

    let current = group_progress(group, habits, as_of, today);
    GroupCard {
        id: group.id.clone(),
        name: group.name.clone(),
        emoji: group.emoji.clone(),
        kind: group.kind,
        period: group.period,
        current,
        target: group.target,
        percentage: progress_percentage(current, group.target),
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitKind;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: &str, goals: Vec<Goal>) -> Habit {
        Habit {
            id: id.to_string(),
            name: id.to_string(),
            emoji: None,
            kind: HabitKind::Daily,
            scheduled_time: None,
            goals,
            completions: BTreeMap::new(),
        }
    }

    fn complete(habit: &mut Habit, day: NaiveDate) {
        habit.completions.insert(date_key(day), true);
    }

    fn group(kind: GroupKind, ids: &[&str], target: u32) -> GroupedGoal {
        GroupedGoal {
            id: "group".to_string(),
            name: "group".to_string(),
            emoji: None,
            kind,
            habit_ids: ids.iter().map(|id| id.to_string()).collect(),
            period: Period::Week,
            target,
        }
    }

    // 2026-08-03 is a Monday, 2026-08-07 a Friday.
    const Y: i32 = 2026;

    #[test]
    fn weekly_progress_of_untouched_habit_is_zero() {
        let h = habit("h", vec![Goal::Weekly { target: 5 }]);
        assert_eq!(weekly_progress(&h, date(Y, 8, 7)), 0);
        assert_eq!(progress_percentage(0, 5), 0.0);
    }

    #[test]
    fn full_working_week_meets_weekly_target() {
        let mut h = habit("h", vec![Goal::Weekly { target: 5 }]);
        for day in 3..=7 {
            complete(&mut h, date(Y, 8, day));
        }
        assert_eq!(weekly_progress(&h, date(Y, 8, 7)), 5);
        assert_eq!(progress_percentage(5, 5), 100.0);
    }

    #[test]
    fn weekly_progress_ignores_days_before_the_week() {
        let mut h = habit("h", vec![]);
        complete(&mut h, date(Y, 8, 2)); // Sunday of the previous week
        complete(&mut h, date(Y, 8, 3));
        assert_eq!(weekly_progress(&h, date(Y, 8, 7)), 1);
    }

    #[test]
    fn weekly_progress_never_exceeds_window_length() {
        let mut h = habit("h", vec![]);
        for offset in 0..14 {
            complete(&mut h, date(Y, 8, 1) + Duration::days(offset));
        }
        let sunday = date(Y, 8, 9);
        assert_eq!(weekly_progress(&h, sunday), 7);
    }

    #[test]
    fn monthly_progress_counts_from_month_start() {
        let mut h = habit("h", vec![]);
        complete(&mut h, date(Y, 7, 31));
        complete(&mut h, date(Y, 8, 1));
        complete(&mut h, date(Y, 8, 14));
        complete(&mut h, date(Y, 8, 15));
        assert_eq!(monthly_progress(&h, date(Y, 8, 15)), 3);
    }

    #[test]
    fn streak_zero_without_today_or_yesterday() {
        let today = date(Y, 8, 7);
        let mut h = habit("h", vec![]);
        complete(&mut h, today - Duration::days(2));
        assert_eq!(streak(&h, today), 0);
    }

    #[test]
    fn streak_of_one_from_yesterday_only() {
        let today = date(Y, 8, 7);
        let mut h = habit("h", vec![]);
        complete(&mut h, today - Duration::days(1));
        assert_eq!(streak(&h, today), 1);
    }

    #[test]
    fn streak_counts_thirty_consecutive_days() {
        let today = date(Y, 8, 7);
        let mut h = habit("h", vec![]);
        for offset in 0..30 {
            complete(&mut h, today - Duration::days(offset));
        }
        assert_eq!(streak(&h, today), 30);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let today = date(Y, 8, 7);
        let mut h = habit("h", vec![]);
        complete(&mut h, today);
        complete(&mut h, today - Duration::days(1));
        complete(&mut h, today - Duration::days(3));
        assert_eq!(streak(&h, today), 2);
    }

    #[test]
    fn streak_ignores_explicit_false_entries() {
        let today = date(Y, 8, 7);
        let mut h = habit("h", vec![]);
        complete(&mut h, today);
        h.completions.insert(date_key(today - Duration::days(1)), false);
        complete(&mut h, today - Duration::days(2));
        assert_eq!(streak(&h, today), 1);
    }

    #[test]
    fn combined_counts_only_days_where_every_member_completed() {
        let friday = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        for day in 3..=7 {
            complete(&mut a, date(Y, 8, day));
        }
        let mut b = habit("b", vec![]);
        complete(&mut b, date(Y, 8, 3)); // Monday only
        let habits = vec![a, b];

        let combined = group(GroupKind::Combined, &["a", "b"], 3);
        assert_eq!(group_progress(&combined, &habits, friday, friday), 1);
    }

    #[test]
    fn aggregate_counts_every_completion_event() {
        let friday = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        for day in 3..=7 {
            complete(&mut a, date(Y, 8, day));
        }
        let mut b = habit("b", vec![]);
        complete(&mut b, date(Y, 8, 3));
        let habits = vec![a, b];

        let aggregate = group(GroupKind::Aggregate, &["a", "b"], 10);
        assert_eq!(group_progress(&aggregate, &habits, friday, friday), 6);

        let combined = group(GroupKind::Combined, &["a", "b"], 10);
        assert!(
            group_progress(&combined, &habits, friday, friday)
                <= group_progress(&aggregate, &habits, friday, friday)
        );
    }

    #[test]
    fn exclusion_streak_counts_days_without_any_completion() {
        let today = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        complete(&mut a, today - Duration::days(10));
        let habits = vec![a, habit("b", vec![])];

        let exclusion = group(GroupKind::MutualExclusion, &["a", "b"], 30);
        assert_eq!(group_progress(&exclusion, &habits, today, today), 10);
    }

    #[test]
    fn exclusion_streak_zero_when_completed_today() {
        let today = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        complete(&mut a, today);
        let habits = vec![a, habit("b", vec![])];

        let exclusion = group(GroupKind::MutualExclusion, &["a", "b"], 30);
        assert_eq!(group_progress(&exclusion, &habits, today, today), 0);
    }

    #[test]
    fn exclusion_streak_zero_without_any_recorded_completion() {
        let today = date(Y, 8, 7);
        let habits = vec![habit("a", vec![]), habit("b", vec![])];

        let exclusion = group(GroupKind::MutualExclusion, &["a", "b"], 30);
        assert_eq!(group_progress(&exclusion, &habits, today, today), 0);
    }

    #[test]
    fn dangling_member_ids_are_excluded() {
        let friday = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        complete(&mut a, date(Y, 8, 3));
        let habits = vec![a];

        let aggregate = group(GroupKind::Aggregate, &["a", "gone"], 10);
        assert_eq!(group_progress(&aggregate, &habits, friday, friday), 1);
    }

    #[test]
    fn percentage_clamps_at_one_hundred() {
        assert_eq!(progress_percentage(12, 5), 100.0);
        assert_eq!(progress_percentage(2, 8), 25.0);
    }

    #[test]
    fn overview_reports_completion_on_the_as_of_day() {
        let today = date(Y, 8, 7);
        let as_of = date(Y, 8, 5);
        let mut h = habit("h", vec![Goal::Weekly { target: 5 }]);
        complete(&mut h, as_of);
        let data = AppData { habits: vec![h], groups: vec![] };

        let overview = build_overview(&data, as_of, today);
        assert!(!overview.today);
        assert_eq!(overview.date, as_of.to_string());
        assert!(overview.habits[0].completed);
        assert_eq!(overview.habits[0].goals[0].current, 1);
    }

    #[test]
    fn group_card_lists_member_completion_days_in_window() {
        let friday = date(Y, 8, 7);
        let mut a = habit("a", vec![]);
        complete(&mut a, date(Y, 8, 2)); // before the week, excluded
        complete(&mut a, date(Y, 8, 4));
        let mut b = habit("b", vec![]);
        complete(&mut b, date(Y, 8, 7));
        let habits = vec![a, b];

        let combined = group(GroupKind::Combined, &["a", "b"], 3);
        let card = group_card(&combined, &habits, friday, friday);
        assert_eq!(card.members.len(), 2);
        assert_eq!(card.members[0].completed_days, vec![date(Y, 8, 4).to_string()]);
        assert!(card.members[1].completed);
    }
}
