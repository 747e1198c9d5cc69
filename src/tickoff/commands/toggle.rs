use crate::commands::{CmdMessage, CmdResult};
use crate::selector::TodoSelector;
use crate::store::TodoStore;

use super::helpers::resolve_selector;

pub fn run(store: &mut TodoStore, selector: &TodoSelector) -> CmdResult {
    let Some(id) = resolve_selector(store, selector) else {
        return CmdResult::missing(selector);
    };
    let (Some(completed), Some(todo)) = (store.toggle(id), store.get(id).cloned()) else {
        return CmdResult::missing(selector);
    };

    let state = if completed { "completed" } else { "pending" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked {} {}: {}",
        id,
        state,
        todo.task()
    )));
    result.with_affected_todos(vec![todo])
}
