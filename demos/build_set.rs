use page_set::{ActionRunner, TestPageSet};

fn main() {
    // Initialize logger
    env_logger::init();

    // Build the fixture set the way the harness would at startup
    let set = TestPageSet::build();
    println!("{} ({} pages)", set.description, set.len());

    // Walk the descriptors in visit order, letting each page customize the
    // navigation steps the harness would execute against it
    for page in &set {
        let runner = ActionRunner::new().navigate(&page.url);
        let runner = page.run_navigation(runner);

        println!("{}: {} queued steps", page.display_name(), runner.steps().len());
        for step in runner.steps() {
            println!("  {:?}", step);
        }
    }
}
