use article_relink::{config, output, process, scan, types::RunReport};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "article-relink")]
#[command(about = "Rewrites remote image URLs in article HTML to sequential local files")]
#[command(long_about = "\
Rewrites remote image URLs in article HTML to sequential local files

Each article folder holds one article.html plus the images already downloaded
next to it. The i-th <img> inside the .content div is relinked to the i+1-th
numbered file (image-1.webp is the cover, managed elsewhere):

  base/
  ├── relink.toml                  # Run configuration (optional)
  ├── articles/
  │   └── first-post/
  │       ├── article.html         # <img src=\"https://cdn...\"> → image-2.webp
  │       ├── image-1.webp         # Cover
  │       ├── image-2.webp         # First in-content image
  │       └── image-3.webp
  └── feedback-friday/
      └── week-12/
          ├── article.html
          └── image-2.webp

Occurrences whose expected file is missing are reported and left untouched.
Run with --dry-run first to preview every substitution.")]
#[command(version)]
struct Cli {
    /// Base directory holding the section subdirectories
    #[arg(long, default_value = ".")]
    base: PathBuf,

    /// Show the changes without applying them
    #[arg(long)]
    dry_run: bool,

    /// Also write the full run report as JSON to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(&cli.base)?;
    let folders = scan::find_article_folders(&cli.base, &config)?;
    output::print_header(&cli.base, folders.len(), cli.dry_run);

    let mut results = Vec::with_capacity(folders.len());
    let mut total_changes = 0;
    let mut total_errors = 0;

    for folder in &folders {
        let result = process::process_article(folder, &config, cli.dry_run)?;
        output::print_article_result(&result);
        total_changes += result.changes.len();
        total_errors += result.errors.len();
        results.push(result);
    }

    output::print_summary(folders.len(), total_changes, total_errors, cli.dry_run);

    if let Some(report_path) = cli.report {
        let report = RunReport {
            base: cli.base.display().to_string(),
            dry_run: cli.dry_run,
            folders_processed: folders.len(),
            total_changes,
            total_errors,
            articles: results,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&report_path, json)?;
    }

    Ok(())
}
