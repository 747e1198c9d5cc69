use crate::commands::{CmdMessage, CmdResult, Counts};
use crate::store::TodoStore;

pub fn run(store: &TodoStore) -> CmdResult {
    let counts = Counts {
        completed: store.count_completed(),
        pending: store.count_pending(),
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} completed, {} pending",
        counts.completed, counts.pending
    )));
    result.with_counts(counts)
}
