//! Developer tasks for the textmetrics workspace.
//!
//! ```text
//! cargo xtask man [--out DIR]
//! cargo xtask completions [--out DIR]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

const BIN_NAME: &str = "textmetrics";

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = textmetrics::command();

    write_man_page(out, &cmd, BIN_NAME)?;
    for sub in cmd.get_subcommands() {
        let name = format!("{BIN_NAME}-{}", sub.get_name());
        let sub = sub.clone().name(name.clone());
        write_man_page(out, &sub, &name)?;
    }
    println!("man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(out: &Path, cmd: &clap::Command, name: &str) -> io::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out.join(format!("{name}.1")), buffer)
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = textmetrics::command();
    for &shell in Shell::value_variants() {
        let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn man_writes_page_per_subcommand() {
        let tmp = tempfile::tempdir().unwrap();
        man(tmp.path()).unwrap();

        let root = fs::read_to_string(tmp.path().join("textmetrics.1")).unwrap();
        assert!(root.contains("textmetrics"));
        for sub in ["analyze", "readability", "frequency", "info"] {
            let page = tmp.path().join(format!("textmetrics-{sub}.1"));
            assert!(page.is_file(), "missing {}", page.display());
        }
    }

    #[test]
    fn completions_cover_every_shell() {
        let tmp = tempfile::tempdir().unwrap();
        completions(tmp.path()).unwrap();

        let written = fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(written, Shell::value_variants().len());
    }
}
