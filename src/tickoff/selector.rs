use crate::model::TodoId;

/// How the user pointed at a todo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TodoSelector {
    Id(TodoId),
    Task(String),
}

impl std::fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoSelector::Id(id) => write!(f, "{}", id),
            TodoSelector::Task(task) => write!(f, "\"{}\"", task),
        }
    }
}

impl std::str::FromStr for TodoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        match digits.parse::<u64>() {
            Ok(n) if n > 0 => Ok(TodoId(n)),
            _ => Err(format!("Invalid todo id: {}", s)),
        }
    }
}

/// Resolves raw input words into a selector.
///
/// A single word that reads as an id (`3` or `#3`) selects by id. Anything
/// else is joined with single spaces and matched against task text.
pub fn parse_selector<I: AsRef<str>>(inputs: &[I]) -> Option<TodoSelector> {
    if inputs.is_empty() {
        return None;
    }

    if let [single] = inputs {
        if let Ok(id) = single.as_ref().trim().parse::<TodoId>() {
            return Some(TodoSelector::Id(id));
        }
    }

    task_selector(inputs)
}

/// Joins the input words into a task-text selector, even when they read as
/// an id. A todo titled `3` is reachable this way.
pub fn task_selector<I: AsRef<str>>(inputs: &[I]) -> Option<TodoSelector> {
    if inputs.is_empty() {
        return None;
    }
    let task = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    Some(TodoSelector::Task(task))
}
