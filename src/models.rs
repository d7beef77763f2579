use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Daily,
    Anytime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Weekly,
    Streak,
    Monthly,
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GoalKind::Weekly => "weekly",
            GoalKind::Streak => "streak",
            GoalKind::Monthly => "monthly",
        })
    }
}

/// A habit carries at most one goal per kind; creation enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goal {
    Weekly { target: u32 },
    Streak { target: u32, best: u32 },
    Monthly { target: u32 },
}

impl Goal {
    pub fn kind(&self) -> GoalKind {
        match self {
            Goal::Weekly { .. } => GoalKind::Weekly,
            Goal::Streak { .. } => GoalKind::Streak,
            Goal::Monthly { .. } => GoalKind::Monthly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub kind: HabitKind,
    pub scheduled_time: Option<String>,
    pub goals: Vec<Goal>,
    pub completions: BTreeMap<String, bool>,
}

impl Habit {
    /// An absent key counts as not completed; days are boolean, never
    /// quantities.
    pub fn is_completed(&self, key: &str) -> bool {
        self.completions.get(key).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Aggregate,
    Combined,
    MutualExclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Week,
    Month,
}

/// References member habits by id without owning them; a dangling id is
/// skipped during calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedGoal {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub kind: GroupKind,
    pub habit_ids: Vec<String>,
    pub period: Period,
    pub target: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub groups: Vec<GroupedGoal>,
}

#[derive(Debug, Deserialize)]
pub struct NewGoal {
    pub kind: GoalKind,
    pub target: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub emoji: Option<String>,
    pub kind: HabitKind,
    #[serde(default)]
    pub scheduled: bool,
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub goals: Vec<NewGoal>,
}

#[derive(Debug, Deserialize)]
pub struct NewGroupedGoal {
    pub name: String,
    pub emoji: Option<String>,
    pub kind: GroupKind,
    pub habit_ids: Vec<String>,
    pub period: Period,
    pub target: u32,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OverviewParams {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    pub kind: GoalKind,
    pub current: u32,
    pub target: u32,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct HabitCard {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub kind: HabitKind,
    pub scheduled_time: Option<String>,
    pub completed: bool,
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Serialize)]
pub struct GroupMemberCard {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub completed: bool,
    pub completed_days: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupCard {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub kind: GroupKind,
    pub period: Period,
    pub current: u32,
    pub target: u32,
    pub percentage: f64,
    pub members: Vec<GroupMemberCard>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub date: String,
    pub today: bool,
    pub habits: Vec<HabitCard>,
    pub groups: Vec<GroupCard>,
}
