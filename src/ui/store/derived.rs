use crate::records::{BlockContent, FinanceTransaction, Page};

use super::state::State;

/// A todo block addressed by its owning page. Toggling needs both ids.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRef {
    pub page_id: String,
    pub block_id: String,
    pub text: String,
    pub completed: bool,
}

/// Every todo across every page, in page order then block order.
pub fn get_all_todos(state: &State) -> Vec<TodoRef> {
    state
        .pages
        .iter()
        .flat_map(|page| {
            page.blocks.iter().filter_map(|block| match &block.content {
                BlockContent::Todo(todo) => Some(TodoRef {
                    page_id: page.id.clone(),
                    block_id: block.id.clone(),
                    text: todo.text.clone(),
                    completed: todo.is_completed(),
                }),
                _ => None,
            })
        })
        .collect()
}

/// Pages shown in the home queue. The daily page has its own card.
pub fn get_queue_pages(state: &State) -> Vec<&Page> {
    state.pages.iter().filter(|p| !p.is_daily()).collect()
}

/// Pages treated as notes: explicitly categorized, or carrying prose.
pub fn get_note_pages(state: &State) -> Vec<&Page> {
    state
        .pages
        .iter()
        .filter(|p| {
            !p.is_daily()
                && (p.category.as_deref() == Some("note")
                    || p.category.as_deref() == Some("unprocessed")
                    || p.has_text_block())
        })
        .collect()
}

pub fn get_active_page<'a>(state: &'a State) -> Option<&'a Page> {
    let id = state.active_page_id.as_ref()?;
    state.pages.iter().find(|p| &p.id == id)
}

/// Transactions bucketed by their date label. Labels appear in the order
/// they are first seen in the ledger, and each bucket keeps ledger order.
pub fn get_grouped_transactions(state: &State) -> Vec<(String, Vec<&FinanceTransaction>)> {
    let mut groups: Vec<(String, Vec<&FinanceTransaction>)> = Vec::new();

    for tx in state.transactions.iter() {
        match groups.iter_mut().find(|(date, _)| *date == tx.date) {
            Some((_, txs)) => txs.push(tx),
            None => groups.push((tx.date.clone(), vec![tx])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use nanoid::nanoid;
    use std::{
        fs,
        sync::{Arc, Mutex},
    };

    use crate::{
        config::ConfigManager,
        fixtures,
        ui::store::{action::Action, Store},
    };

    use super::*;

    fn setup() -> (String, Store) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
        let store = Store::new(conf_manager, fixtures::load().unwrap());
        (tmp_path, store)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    #[test]
    fn test_get_all_todos() {
        let (path, store) = setup();
        let state = store.get_state();
        let todos = get_all_todos(&state);
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].page_id, "daily");
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
        tear_down(path);
    }

    #[test]
    fn test_queue_excludes_daily_page() {
        let (path, store) = setup();
        let state = store.get_state();
        let queue = get_queue_pages(&state);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, "1");
        tear_down(path);
    }

    #[test]
    fn test_note_pages_include_prose_pages() {
        let (path, store) = setup();
        let state = store.get_state();
        let notes = get_note_pages(&state);
        // "Product Strategy" has a text block
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Product Strategy");
        tear_down(path);
    }

    #[test]
    fn test_get_active_page() {
        let (path, store) = setup();
        assert!(get_active_page(&store.get_state()).is_none());

        store.dispatch(Action::SelectPage(Some("1".to_string())));
        let state = store.get_state();
        assert_eq!(get_active_page(&state).unwrap().id, "1");
        tear_down(path);
    }

    #[test]
    fn test_grouped_transactions_preserve_first_seen_order() {
        let (path, store) = setup();
        let state = store.get_state();
        let groups = get_grouped_transactions(&state);

        let labels: Vec<&str> = groups.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Yesterday", "Jan 1"]);

        let total: usize = groups.iter().map(|(_, txs)| txs.len()).sum();
        assert_eq!(total, state.transactions.len());
        tear_down(path);
    }

    #[test]
    fn test_contribution_lands_in_today_group() {
        let (path, store) = setup();
        store.dispatch(Action::AddContribution {
            goal_id: "g1".to_string(),
            amount: 100.0,
        });

        let state = store.get_state();
        let groups = get_grouped_transactions(&state);
        assert_eq!(groups[0].0, "Today");
        assert_eq!(groups[0].1.len(), 3);
        assert!(groups[0].1[0].title.starts_with("Transfer"));
        tear_down(path);
    }
}
