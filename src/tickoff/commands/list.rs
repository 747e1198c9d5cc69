use crate::commands::{CmdMessage, CmdResult, Counts};
use crate::store::TodoStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Pending,
    Completed,
}

pub fn run(store: &TodoStore, filter: ListFilter) -> CmdResult {
    let listed: Vec<_> = store
        .list_all()
        .into_iter()
        .filter(|t| match filter {
            ListFilter::All => true,
            ListFilter::Pending => !t.is_completed(),
            ListFilter::Completed => t.is_completed(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No todos found."));
    }
    result.with_listed_todos(listed).with_counts(Counts {
        completed: store.count_completed(),
        pending: store.count_pending(),
    })
}
