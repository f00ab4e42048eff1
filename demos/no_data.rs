use cursive::traits::*;
use cursive::views::{Dialog, SelectView, TextView};
use cursive::Cursive;
use cursive_list_placeholder::{Placeholdable, PlaceholderView};

// An initially empty task list: the placeholder text stays on screen until
// the first task is added, and comes back when the last one is removed.

type TaskList = PlaceholderView<SelectView, TextView>;

fn main() {
    let mut siv = cursive::default();

    let tasks = SelectView::<String>::new()
        .placeholder_text("Nothing to do!")
        .with_name("tasks");

    siv.add_layer(
        Dialog::around(tasks.min_size((30, 8)))
            .title("Tasks")
            .button("Add", add_task)
            .button("Remove", remove_task)
            .button("Quit", |s| s.quit()),
    );

    siv.run();
}

fn add_task(siv: &mut Cursive) {
    siv.call_on_name("tasks", |view: &mut TaskList| {
        let n = view.get_inner().len();
        view.get_inner_mut().add_item_str(format!("Task #{}", n + 1));
    });
}

fn remove_task(siv: &mut Cursive) {
    siv.call_on_name("tasks", |view: &mut TaskList| {
        let len = view.get_inner().len();
        if len > 0 {
            view.get_inner_mut().remove_item(len - 1);
        }
    });
}
