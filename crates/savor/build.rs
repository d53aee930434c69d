use std::fs;
use std::path::Path;

use clap::CommandFactory;

// cli.rs is kept clap-only precisely so it can be compiled here on its own:
// the man pages are derived from the same command tree the binary parses,
// without this script depending on the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo");
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    write_man_pages(&cli::Cli::command(), &man_dir);
}

/// Emit one page per command, walking the tree so subcommand pages come out
/// as `savor-vouchers.1`, `savor-vouchers-list.1`, and so on.
fn write_man_pages(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("man page for `{name}` failed to render: {e}"));
    let path = dir.join(format!("{name}.1"));
    fs::write(&path, page)
        .unwrap_or_else(|e| panic!("could not write {}: {e}", path.display()));

    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        write_man_pages(&sub, dir);
    }
}
