use crate::commands::{CmdMessage, CmdResult};
use crate::selector::TodoSelector;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, selector: &TodoSelector) -> CmdResult {
    let removed = match selector {
        TodoSelector::Id(id) => store.remove_by_id(*id),
        TodoSelector::Task(task) => store.remove_by_task(task),
    };

    let Some(todo) = removed else {
        return CmdResult::missing(selector);
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {}: {}",
        todo.id(),
        todo.task()
    )));
    result.with_affected_todos(vec![todo])
}
