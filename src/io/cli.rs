//! Command-line interface for batch puzzle generation from word-list files

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::algorithm::assembler::PuzzleAssembler;
use crate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::text::render;
use crate::io::wordfile::load_word_list;
use crate::puzzle::assembled::Puzzle;
use crate::words::entry::WordEntry;
use crate::words::list::WordList;
use crate::words::themes::{self, CROSSWORD_THEMES, Theme, WORD_SEARCH_THEMES};

/// Puzzle family selector for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Fixed-size grid, eight directions, filler letters
    WordSearch,
    /// Computed bounds, blocked cells, numbered clues
    Crossword,
}

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(
    author,
    version,
    about = "Generate word search and crossword puzzles from word lists"
)]
/// Command-line arguments for the puzzle generation tool
pub struct Cli {
    /// Word-list file or directory to process
    #[arg(value_name = "TARGET", required_unless_present_any = ["theme", "list_themes"])]
    pub target: Option<PathBuf>,

    /// Puzzle kind to generate
    #[arg(short, long, value_enum, default_value_t = KindArg::WordSearch)]
    pub kind: KindArg,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in cells (word search only)
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub width: usize,

    /// Grid height in cells (word search only)
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub height: usize,

    /// Generate from a built-in theme instead of a file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// List built-in themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of word-list files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    assembler: PuzzleAssembler,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            assembler: PuzzleAssembler::default(),
        }
    }

    /// Process files or built-in themes according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, word-list parsing, or output
    /// writing fails.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.list_themes {
            print_themes();
            return Ok(());
        }

        if let Some(name) = self.cli.theme.clone() {
            return self.process_theme(&name);
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Theme output goes to the terminal rather than a file
    #[allow(clippy::print_stdout)]
    fn process_theme(&self, name: &str) -> Result<()> {
        let table = self.theme_table();
        let theme = themes::find(table, name)?;
        let words = theme.word_list()?;
        let puzzle = self.generate(&words)?;

        self.report_skipped(&puzzle);
        println!("{}", render(&puzzle));
        Ok(())
    }

    const fn theme_table(&self) -> &'static [Theme] {
        match self.cli.kind {
            KindArg::WordSearch => WORD_SEARCH_THEMES,
            KindArg::Crossword => CROSSWORD_THEMES,
        }
    }

    fn generate(&self, words: &WordList) -> Result<Puzzle> {
        match self.cli.kind {
            KindArg::WordSearch => {
                self.assembler
                    .word_search(words, self.cli.width, self.cli.height, self.cli.seed)
            }
            KindArg::Crossword => Ok(self.assembler.crossword(words, self.cli.seed)),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = &self.cli.target else {
            return Ok(vec![]);
        };

        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some("txt") {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a .txt word list",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|source| PuzzleError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| PuzzleError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt")
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a word-list file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = get_output_path(input_path);

        let words = load_word_list(input_path)?;
        let puzzle = self.generate(&words)?;
        self.report_skipped(&puzzle);

        std::fs::write(&output_path, render(&puzzle)).map_err(|source| {
            PuzzleError::FileSystem {
                path: output_path.clone(),
                operation: "write puzzle",
                source,
            }
        })?;

        if let Some(ref pm) = self.progress_manager {
            pm.file_done();
        }

        Ok(())
    }

    // Allow print for user feedback about degraded layouts
    #[allow(clippy::print_stderr)]
    fn report_skipped(&self, puzzle: &Puzzle) {
        if self.cli.quiet || puzzle.skipped.is_empty() {
            return;
        }
        let skipped: Vec<&str> = puzzle.skipped.iter().map(WordEntry::word).collect();
        eprintln!("Could not place: {}", skipped.join(", "));
    }
}

/// Derive the output path: `<stem><suffix>.<extension>` beside the input
pub fn get_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        extension.to_string_lossy()
    );

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Whether a path already carries the output suffix
fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

// Theme listing goes to the terminal by request
#[allow(clippy::print_stdout)]
fn print_themes() {
    println!("Word search themes:");
    for theme in WORD_SEARCH_THEMES {
        println!("  {} ({} words)", theme.name, theme.entries.len());
    }
    println!("Crossword themes:");
    for theme in CROSSWORD_THEMES {
        println!("  {} ({} words)", theme.name, theme.entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::get_output_path;
    use std::path::Path;

    #[test]
    fn test_output_path_keeps_parent_and_extension() {
        let output = get_output_path(Path::new("lists/animals.txt"));
        assert_eq!(output, Path::new("lists/animals_puzzle.txt"));
    }
}
