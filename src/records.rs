//! Display records for pages, habits, and finance data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Id of the page holding today's todos. Seeded by the fixtures and
/// targeted by inline todo capture.
pub const DAILY_PAGE_ID: &str = "daily";

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates an id for records created at runtime. Fixture records carry
/// fixed ids; captured ones get a timestamp plus a counter so two captures
/// in the same millisecond stay distinct.
pub fn gen_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{millis}-{n}")
}

/// A titled container of ordered content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub blocks: Vec<Block>,
    pub updated_at: String,
}

impl Page {
    pub fn is_daily(&self) -> bool {
        self.id == DAILY_PAGE_ID
    }

    pub fn has_text_block(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b.content, BlockContent::Text(_)))
    }
}

/// One content item within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum BlockContent {
    Heading(String),
    Text(String),
    Todo(TodoContent),
    HabitWidget,
    FinanceWidget,
}

/// Todo payload. The completion flag drifted between two field names
/// across fixture iterations (`completed` vs `done`); reads prefer
/// `completed`, fall back to `done`, and default to false. Toggling
/// migrates the record to `completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    done: Option<bool>,
}

impl TodoContent {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            completed: Some(false),
            done: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.or(self.done).unwrap_or(false)
    }

    pub fn toggle(&mut self) {
        let flipped = !self.is_completed();
        self.completed = Some(flipped);
        self.done = None;
    }
}

/// A tracked recurring activity with a per-day completion vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub meta: String,
    pub color: String,
    pub data: Vec<u8>,
    pub monthly: u32,
    pub yearly: u32,
}

/// Days in the per-habit activity vector.
pub const HABIT_WEEK_DAYS: usize = 7;

impl Habit {
    pub fn new(name: &str, meta: &str) -> Self {
        Self {
            id: gen_id("h"),
            name: name.to_string(),
            meta: meta.to_string(),
            color: "black".to_string(),
            data: vec![0; HABIT_WEEK_DAYS],
            monthly: 0,
            yearly: 0,
        }
    }

    pub fn week_count(&self) -> usize {
        self.data.iter().filter(|v| **v > 0).count()
    }

    pub fn active_today(&self) -> bool {
        self.data.first().is_some_and(|v| *v > 0)
    }

    pub fn toggle_today(&mut self) {
        if let Some(today) = self.data.first_mut() {
            *today = if *today > 0 { 0 } else { 1 };
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceGoal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub color: String,
}

impl FinanceGoal {
    /// Percent of target reached, rounded, clamped to 100.
    pub fn progress(&self) -> u16 {
        if self.target <= 0.0 {
            return 0;
        }
        let pct = (self.current / self.target * 100.0).round();
        (pct as u16).min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceAccount {
    pub name: String,
    pub balance: f64,
    pub color: String,
    pub text: String,
    pub number: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceTransaction {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: String,
    pub icon: String,
}

impl FinanceTransaction {
    /// Signed display amount, e.g. "+$4200.00" / "-$6.50".
    pub fn signed_amount(&self) -> String {
        let sign = match self.kind {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        };
        format!("{sign}${:.2}", self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TimeScale {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_completed_field_preferred() {
        let todo: TodoContent =
            serde_json::from_str(r#"{"text": "a", "completed": true, "done": false}"#).unwrap();
        assert!(todo.is_completed());
    }

    #[test]
    fn test_todo_done_fallback() {
        let todo: TodoContent = serde_json::from_str(r#"{"text": "a", "done": true}"#).unwrap();
        assert!(todo.is_completed());
    }

    #[test]
    fn test_todo_defaults_to_incomplete() {
        let todo: TodoContent = serde_json::from_str(r#"{"text": "a"}"#).unwrap();
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_todo_toggle_twice_returns_original() {
        let mut todo: TodoContent = serde_json::from_str(r#"{"text": "a", "done": true}"#).unwrap();
        todo.toggle();
        assert!(!todo.is_completed());
        todo.toggle();
        assert!(todo.is_completed());
    }

    #[test]
    fn test_todo_toggle_migrates_to_completed() {
        let mut todo: TodoContent =
            serde_json::from_str(r#"{"text": "a", "done": false}"#).unwrap();
        todo.toggle();
        let serialized = serde_json::to_string(&todo).unwrap();
        assert!(serialized.contains("completed"));
        assert!(!serialized.contains("done"));
    }

    #[test]
    fn test_block_tagged_payloads() {
        let heading: Block =
            serde_json::from_str(r#"{"id": "b1", "type": "heading", "content": "Focus"}"#).unwrap();
        assert_eq!(heading.content, BlockContent::Heading("Focus".to_string()));

        let todo: Block = serde_json::from_str(
            r#"{"id": "b2", "type": "todo", "content": {"text": "x", "completed": false}}"#,
        )
        .unwrap();
        assert!(matches!(todo.content, BlockContent::Todo(_)));

        let widget: Block =
            serde_json::from_str(r#"{"id": "b3", "type": "habit_widget"}"#).unwrap();
        assert_eq!(widget.content, BlockContent::HabitWidget);
    }

    #[test]
    fn test_habit_week_count() {
        let mut habit = Habit::new("Reading", "20p/day");
        assert_eq!(habit.week_count(), 0);
        assert!(!habit.active_today());
        habit.toggle_today();
        assert_eq!(habit.week_count(), 1);
        assert!(habit.active_today());
        habit.toggle_today();
        assert!(!habit.active_today());
    }

    #[test]
    fn test_goal_progress() {
        let goal = FinanceGoal {
            id: "g1".to_string(),
            name: "Japan Trip".to_string(),
            target: 8000.0,
            current: 3200.0,
            color: "rose".to_string(),
        };
        assert_eq!(goal.progress(), 40);
    }

    #[test]
    fn test_goal_progress_clamped() {
        let goal = FinanceGoal {
            id: "g1".to_string(),
            name: "Done".to_string(),
            target: 100.0,
            current: 150.0,
            color: "blue".to_string(),
        };
        assert_eq!(goal.progress(), 100);
    }

    #[test]
    fn test_signed_amount() {
        let tx = FinanceTransaction {
            id: "t1".to_string(),
            title: "Blue Bottle Coffee".to_string(),
            category: "Food & Drink".to_string(),
            amount: 6.5,
            kind: EntryKind::Expense,
            date: "Today".to_string(),
            icon: "🍽".to_string(),
        };
        assert_eq!(tx.signed_amount(), "-$6.50");
    }

    #[test]
    fn test_gen_id_unique() {
        let a = gen_id("p");
        let b = gen_id("p");
        assert_ne!(a, b);
    }
}
