// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_quickstart(tasks: usize, tags: usize) -> String {
    let mut yaml = String::from("apiVersion: console.openshift.io/v1\nkind: QuickStarts\nmetadata:\n  name: bench-quickstart\n  tags:\n");
    for i in 0..tags {
        let kind = if i % 3 == 0 { "bundle" } else { "product" };
        yaml.push_str(&format!("    - kind: {kind}\n      value: value-{i}\n"));
    }
    yaml.push_str("spec:\n  displayName: Bench QuickStart\n  description: Generated for benchmarks\n  tasks:\n");
    for i in 0..tasks {
        yaml.push_str(&format!(
            "    - title: Task {i}\n      description: |\n        Step one of task {i}.\n        Step two of task {i}.\n      review:\n        instructions: Did task {i} work?\n        failedTaskHelp: Try task {i} again.\n"
        ));
    }
    yaml
}

#[allow(dead_code)]
pub fn generate_large_quickstart() -> String {
    generate_quickstart(200, 60)
}
