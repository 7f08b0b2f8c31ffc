mod config;
mod paths;
mod registration;
mod render;
mod stories;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, WriteLogger};

use config::Options;
use registration::registered_stories;

fn init_logging(options: &Options) {
    let path = paths::prepare_log_file();

    let result = File::create(&path)
        .map_err(|e| e.to_string())
        .and_then(|file| {
            WriteLogger::init(options.log_level, Config::default(), file).map_err(|e| e.to_string())
        });
    if let Err(e) = result {
        eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
    }
}

fn main() -> ExitCode {
    let options = Options::parse();

    init_logging(&options);

    let stories: Vec<_> = registered_stories()
        .into_iter()
        .filter(|s| options.filters.is_empty() || options.filters.iter().any(|f| s.matches(f)))
        .collect();
    log::info!("{} stories selected", stories.len());

    if stories.is_empty() {
        eprintln!("No stories match {:?}", options.filters);
        return ExitCode::FAILURE;
    }

    for story in stories {
        if options.list {
            println!("{}", story.path());
            continue;
        }

        log::debug!("rendering {}", story.path());
        println!("== {} ==", story.path());
        for line in (story.render)() {
            println!("{}", line);
        }
        println!();
    }

    ExitCode::SUCCESS
}
