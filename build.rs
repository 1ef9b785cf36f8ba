//! Renders `draft75.1` plus one page per subcommand (`draft75-encode.1`,
//! `draft75-decode.1`) into `target/generated-man`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Command, CommandFactory};
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

fn render(page: Man, path: &Path) -> std::io::Result<()> {
    let mut roff = Vec::new();
    page.render(&mut roff)?;
    fs::write(path, roff)
}

fn subcommand_page(parent: &str, sub: &Command) -> (Man, String) {
    let title = format!("{parent}-{}", sub.get_name());
    (Man::new(sub.clone()).title(title.clone()), title)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let man_dir = PathBuf::from("target/generated-man");
    fs::create_dir_all(&man_dir)?;

    let draft75 = cli::Cli::command();
    let name = draft75.get_name().to_owned();
    for sub in draft75.get_subcommands() {
        let (page, title) = subcommand_page(&name, sub);
        render(page, &man_dir.join(format!("{title}.1")))?;
    }
    render(Man::new(draft75), &man_dir.join(format!("{name}.1")))?;

    Ok(())
}
