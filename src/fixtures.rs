//! Static seed data. Everything the app shows at startup comes from this
//! embedded document; nothing is read from disk or a network.

use serde::Deserialize;

use crate::records::{FinanceAccount, FinanceGoal, FinanceTransaction, Habit, Page};

// The daily page's todos predate the `completed` rename, so they still use
// both flag spellings. Kept as-is to exercise the read-side normalization.
const SEED: &str = r#"{
  "pages": [
    {
      "id": "daily",
      "title": "Today",
      "icon": "🗓",
      "category": "system",
      "updatedAt": "Now",
      "blocks": [
        { "id": "b1", "type": "heading", "content": "Morning Focus" },
        { "id": "b2", "type": "todo", "content": { "text": "Review Q4 strategy document", "done": false } },
        { "id": "b3", "type": "todo", "content": { "text": "Email marketing team", "completed": true } }
      ]
    },
    {
      "id": "1",
      "title": "Product Strategy",
      "icon": "🧠",
      "updatedAt": "2h ago",
      "blocks": [
        { "id": "b4", "type": "heading", "content": "Core Principles" },
        { "id": "b5", "type": "text", "content": "Simplicity is the ultimate sophistication." }
      ]
    }
  ],
  "habits": [
    { "id": "h1", "name": "Deep Work", "meta": "2h/day", "color": "black", "data": [1, 1, 0, 1, 1, 1, 0], "monthly": 22, "yearly": 245 },
    { "id": "h2", "name": "Reading", "meta": "20p/day", "color": "black", "data": [0, 1, 1, 1, 0, 1, 1], "monthly": 18, "yearly": 190 },
    { "id": "h3", "name": "Movement", "meta": "45m/day", "color": "black", "data": [1, 0, 1, 0, 1, 1, 1], "monthly": 25, "yearly": 310 }
  ],
  "goals": [
    { "id": "g1", "name": "Real Estate", "target": 100000, "current": 84200, "color": "orange" },
    { "id": "g2", "name": "New Car", "target": 45000, "current": 12000, "color": "purple" },
    { "id": "g3", "name": "Emergency Fund", "target": 20000, "current": 18500, "color": "blue" },
    { "id": "g4", "name": "Japan Trip", "target": 8000, "current": 3200, "color": "rose" }
  ],
  "accounts": [
    { "name": "Main Spending", "balance": 12450.80, "color": "black", "text": "white", "number": "8821" },
    { "name": "High Yield Savings", "balance": 45200.00, "color": "blue", "text": "white", "number": "4410" },
    { "name": "Business Pro", "balance": 8900.25, "color": "emerald", "text": "white", "number": "1002" }
  ],
  "transactions": [
    { "id": "t1", "title": "Blue Bottle Coffee", "category": "Food & Drink", "amount": 6.50, "type": "expense", "date": "Today", "icon": "🍽" },
    { "id": "t2", "title": "Salary Deposit", "category": "Work", "amount": 4200.00, "type": "income", "date": "Today", "icon": "📈" },
    { "id": "t3", "title": "Apple Store", "category": "Tech", "amount": 129.00, "type": "expense", "date": "Yesterday", "icon": "⚡" },
    { "id": "t4", "title": "Uber Trip", "category": "Transport", "amount": 24.80, "type": "expense", "date": "Yesterday", "icon": "🚗" },
    { "id": "t5", "title": "Netflix", "category": "Entertainment", "amount": 15.99, "type": "expense", "date": "Jan 1", "icon": "📺" }
  ]
}"#;

#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub pages: Vec<Page>,
    pub habits: Vec<Habit>,
    pub goals: Vec<FinanceGoal>,
    pub accounts: Vec<FinanceAccount>,
    pub transactions: Vec<FinanceTransaction>,
}

pub fn load() -> serde_json::Result<Fixtures> {
    serde_json::from_str(SEED)
}

#[cfg(test)]
mod tests {
    use crate::records::BlockContent;

    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let fixtures = load().unwrap();
        assert_eq!(fixtures.pages.len(), 2);
        assert_eq!(fixtures.habits.len(), 3);
        assert_eq!(fixtures.goals.len(), 4);
        assert_eq!(fixtures.accounts.len(), 3);
        assert_eq!(fixtures.transactions.len(), 5);
    }

    #[test]
    fn test_daily_page_todo_flags_normalized() {
        let fixtures = load().unwrap();
        let daily = &fixtures.pages[0];
        assert!(daily.is_daily());

        let todos: Vec<bool> = daily
            .blocks
            .iter()
            .filter_map(|b| match &b.content {
                BlockContent::Todo(todo) => Some(todo.is_completed()),
                _ => None,
            })
            .collect();

        // b2 uses the legacy `done` spelling, b3 uses `completed`
        assert_eq!(todos, vec![false, true]);
    }

    #[test]
    fn test_amounts_non_negative() {
        let fixtures = load().unwrap();
        assert!(fixtures.transactions.iter().all(|t| t.amount >= 0.0));
        assert!(fixtures
            .goals
            .iter()
            .all(|g| g.current >= 0.0 && g.target >= 0.0));
        assert!(fixtures.accounts.iter().all(|a| a.balance >= 0.0));
    }

    #[test]
    fn test_habit_vectors_are_one_week() {
        let fixtures = load().unwrap();
        assert!(fixtures
            .habits
            .iter()
            .all(|h| h.data.len() == crate::records::HABIT_WEEK_DAYS));
    }
}
