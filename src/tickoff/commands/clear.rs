use crate::commands::{CmdMessage, CmdResult};
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore) -> CmdResult {
    let removed = store.clear_completed();
    let mut result = CmdResult::default();
    let message = match removed {
        0 => CmdMessage::info("No completed todos to clear."),
        1 => CmdMessage::success("Cleared 1 completed todo."),
        n => CmdMessage::success(format!("Cleared {} completed todos.", n)),
    };
    result.add_message(message);
    result
}
