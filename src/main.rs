use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use kurso::core::catalog::builtin_course;
use kurso::core::content;
use kurso::core::selection::TabId;
use kurso::tui;

#[derive(Parser)]
#[command(name = "kurso", about = "Terminal preview of a course site")]
struct Args {
    /// Course file (JSON). Defaults to the built-in catalog.
    #[arg(short, long)]
    course: Option<PathBuf>,

    /// Tab to open with: lesson, self, or resources
    #[arg(short, long, default_value = "lesson")]
    tab: TabId,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to kurso.log in current directory
    // (the TUI owns stdout, so logs cannot go there)
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("kurso.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Kurso starting up (initial tab: {})", args.tab.key());

    // The course is built exactly once, validated before the terminal is
    // entered, and never mutated afterwards.
    let course = match &args.course {
        Some(path) => content::load_course(path),
        None => {
            let course = builtin_course();
            course.validate().map(|_| course)
        }
    }
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    tui::run(course, args.tab)
}
