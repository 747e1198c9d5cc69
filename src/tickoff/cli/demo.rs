//! Scripted walkthrough of every store operation against an in-memory list.

use super::print::{print_counts, print_heading, print_messages, print_todos};
use tickoff::api::{CmdResult, ListFilter, TickoffApi};
use tickoff::model::TodoId;
use tickoff::selector::TodoSelector;

const DEMO_TASKS: [&str; 4] = ["Buy groceries", "Walk the dog", "Write report", "Call mom"];

/// One step of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Add(&'static str),
    List,
    Toggle(u64),
    RemoveId(u64),
    RemoveTask(&'static str),
    Clear,
    Status,
}

fn script() -> Vec<Step> {
    let mut steps: Vec<Step> = DEMO_TASKS.into_iter().map(Step::Add).collect();
    steps.extend([
        Step::List,
        Step::Toggle(2),
        Step::Toggle(4),
        Step::Status,
        Step::RemoveId(1),
        Step::RemoveTask("Write report"),
        Step::RemoveId(99),
        Step::Toggle(99),
        Step::List,
        Step::Clear,
        Step::Status,
        Step::List,
    ]);
    steps
}

fn heading(step: &Step) -> String {
    match step {
        Step::Add(task) => format!("Adding \"{}\"", task),
        Step::List => "Current todos".to_string(),
        Step::Toggle(id) => format!("Toggling {}", TodoId(*id)),
        Step::RemoveId(id) => format!("Removing {}", TodoId(*id)),
        Step::RemoveTask(task) => format!("Removing \"{}\"", task),
        Step::Clear => "Clearing completed todos".to_string(),
        Step::Status => "Status".to_string(),
    }
}

fn apply(api: &mut TickoffApi, step: &Step) -> CmdResult {
    match step {
        Step::Add(task) => api.add(*task),
        Step::List => api.list(ListFilter::All),
        Step::Toggle(id) => api.toggle_by(&TodoSelector::Id(TodoId(*id))),
        Step::RemoveId(id) => api.remove_by(&TodoSelector::Id(TodoId(*id))),
        Step::RemoveTask(task) => api.remove_by(&TodoSelector::Task(task.to_string())),
        Step::Clear => api.clear_completed(),
        Step::Status => api.status(),
    }
}

pub(super) fn run() {
    let mut api = TickoffApi::default();
    for step in script() {
        print_heading(&heading(&step));
        let result = apply(&mut api, &step);
        match step {
            Step::List => {
                print_todos(&result.listed_todos);
                print_messages(&result.messages);
            }
            Step::Status => {
                if let Some(counts) = &result.counts {
                    print_counts(counts);
                }
            }
            _ => print_messages(&result.messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_reports_misses_and_ends_empty() {
        let mut api = TickoffApi::default();
        let outcomes: Vec<(Step, CmdResult)> = script()
            .into_iter()
            .map(|step| {
                let result = apply(&mut api, &step);
                (step, result)
            })
            .collect();

        let misses: Vec<&Step> = outcomes
            .iter()
            .filter(|(_, r)| r.not_found)
            .map(|(s, _)| s)
            .collect();
        assert_eq!(misses, vec![&Step::RemoveId(99), &Step::Toggle(99)]);

        // #2 and #4 were completed, #1 and #3 removed, so clearing empties it.
        assert!(api.store().is_empty());
        assert_eq!(api.store().next_id(), TodoId(5));
    }

    #[test]
    fn first_listing_shows_tasks_in_order() {
        let mut api = TickoffApi::default();
        let script = script();
        for step in &script[..4] {
            apply(&mut api, step);
        }
        let listed = apply(&mut api, &script[4]).listed_todos;
        let tasks: Vec<&str> = listed.iter().map(|t| t.task()).collect();
        assert_eq!(tasks, DEMO_TASKS);
    }
}
