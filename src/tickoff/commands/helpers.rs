use crate::model::TodoId;
use crate::selector::TodoSelector;
use crate::store::TodoStore;

/// Id of the todo a selector points at, if any.
///
/// Task text resolves to the first todo carrying it, the same one
/// [`TodoStore::remove_by_task`] would take.
pub fn resolve_selector(store: &TodoStore, selector: &TodoSelector) -> Option<TodoId> {
    match selector {
        TodoSelector::Id(id) => store.get(*id).map(|t| t.id()),
        TodoSelector::Task(task) => store.iter().find(|t| t.task() == task).map(|t| t.id()),
    }
}
