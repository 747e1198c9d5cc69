use crate::commands::{CmdMessage, CmdResult};
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, task: String) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(todo) = store.add(task) else {
        result.add_message(CmdMessage::error("No ids left to assign"));
        return result;
    };
    result.add_message(CmdMessage::success(format!(
        "Added {}: {}",
        todo.id(),
        todo.task()
    )));
    result.with_affected_todos(vec![todo])
}
