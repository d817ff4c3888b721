use crate::core::document_builder::build_document;
use crate::core::file_selector::find_project_files;
use crate::domain::models::SelectionCriteria;
use crate::infra::git::resolve_root;
use crate::infra::logger::setup_logger;
use crate::infra::output::{serialize_document, write_output};
use clap::Parser;
use log::{debug, info};
use std::path::Path;

#[derive(Parser)]
#[command(name = "gd-context")]
#[command(about = "Pack Godot project sources into an XML context document", long_about = None)]
pub struct Cli {
    /// Output XML file
    #[arg(short, long, default_value = "claude_context.xml")]
    pub output: String,

    /// Include scene (.tscn) files
    #[arg(short, long)]
    pub scenes: bool,

    /// Include files from test directories
    #[arg(short, long)]
    pub tests: bool,

    /// Include files from addon directories
    #[arg(short, long)]
    pub addons: bool,

    /// Maximum file size in KB
    #[arg(short, long, default_value_t = 100)]
    pub max_size: u64,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting context generation");
    debug!(
        "Parameters: output={}, scenes={}, tests={}, addons={}, max_size={}",
        cli.output, cli.scenes, cli.tests, cli.addons, cli.max_size
    );

    let root = resolve_root()?;
    let count = generate_context(&root, &cli)?;

    println!("Successfully created {} with {} files", cli.output, count);
    Ok(())
}

fn generate_context(root: &Path, cli: &Cli) -> anyhow::Result<usize> {
    let criteria = SelectionCriteria {
        include_scenes: cli.scenes,
        include_tests: cli.tests,
        include_addons: cli.addons,
        max_size_kb: cli.max_size,
    };

    let files = find_project_files(root, &criteria)?;
    let document = build_document(&files, root);
    let xml = serialize_document(&document)?;
    write_output(&xml, Path::new(&cli.output))?;

    Ok(document.records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gd-context").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.output, "claude_context.xml");
        assert!(!cli.scenes);
        assert!(!cli.tests);
        assert!(!cli.addons);
        assert_eq!(cli.max_size, 100);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = parse(&["-o", "out.xml", "-s", "-t", "-a", "-m", "50", "-vv"]);

        assert_eq!(cli.output, "out.xml");
        assert!(cli.scenes);
        assert!(cli.tests);
        assert!(cli.addons);
        assert_eq!(cli.max_size, 50);
        assert_eq!(cli.verbose, 2);
    }

    fn project_with_three_files() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("tests")).unwrap();
        fs::create_dir_all(temp.path().join("addons")).unwrap();
        fs::write(temp.path().join("a.gd"), vec![b'x'; 50]).unwrap();
        fs::write(temp.path().join("tests/b.gd"), vec![b'x'; 50]).unwrap();
        fs::write(temp.path().join("addons/c.gd"), vec![b'x'; 50]).unwrap();
        temp
    }

    #[test]
    fn test_generate_context_default_flags() {
        let temp = project_with_three_files();
        let output = temp.path().join("out.xml");
        let cli = parse(&["-o", output.to_str().unwrap(), "-m", "1"]);

        let count = generate_context(temp.path(), &cli).unwrap();

        assert_eq!(count, 1);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<document index=\"1\">"));
        assert!(xml.contains("<source>a.gd</source>"));
        assert!(!xml.contains("tests/b.gd"));
        assert!(!xml.contains("addons/c.gd"));
    }

    #[test]
    fn test_generate_context_with_tests_and_addons() {
        let temp = project_with_three_files();
        let output = temp.path().join("out.xml");
        let cli = parse(&["-o", output.to_str().unwrap(), "-m", "1", "-t", "-a"]);

        let count = generate_context(temp.path(), &cli).unwrap();

        assert_eq!(count, 3);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<source>a.gd</source>"));
        assert!(xml.contains("<source>tests/b.gd</source>"));
        assert!(xml.contains("<source>addons/c.gd</source>"));
        assert!(xml.contains("<document index=\"3\">"));
    }

    #[test]
    fn test_generate_context_max_size_zero() {
        let temp = project_with_three_files();
        let output = temp.path().join("out.xml");
        let cli = parse(&["-o", output.to_str().unwrap(), "-m", "0", "-t", "-a"]);

        let count = generate_context(temp.path(), &cli).unwrap();

        assert_eq!(count, 0);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<documents>"));
        assert!(!xml.contains("<document "));
    }

    #[test]
    fn test_generate_context_is_idempotent() {
        let temp = project_with_three_files();
        let output = temp.path().join("out.xml");
        let cli = parse(&["-o", output.to_str().unwrap(), "-t", "-a"]);

        generate_context(temp.path(), &cli).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        generate_context(temp.path(), &cli).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
    }
}
