use anyhow::{Context, Result, bail};
use cranium_config::{Config, CursorMovement, FontSizes};
use cranium_engine::{
    CursorStep, FontSizeClass, Session, SessionOptions, parsing::snapshot::normalize,
};
use std::{env, path::PathBuf, process};

/// What to print about the opened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Tree,
    Lines,
    Locate(usize),
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(Self::Tree),
            [cmd] if cmd == "tree" => Ok(Self::Tree),
            [cmd] if cmd == "lines" => Ok(Self::Lines),
            [cmd, offset] if cmd == "locate" => {
                let offset = offset
                    .parse()
                    .with_context(|| format!("Invalid offset '{offset}'"))?;
                Ok(Self::Locate(offset))
            }
            _ => bail!("Unknown command: {}", args.join(" ")),
        }
    }

    fn is_command_word(arg: &str) -> bool {
        matches!(arg, "tree" | "lines" | "locate")
    }
}

fn cursor_step(movement: CursorMovement) -> CursorStep {
    match movement {
        CursorMovement::CodePoint => CursorStep::CodePoint,
        CursorMovement::Byte => CursorStep::Byte,
    }
}

fn point_size(sizes: &FontSizes, class: FontSizeClass) -> f32 {
    match class {
        FontSizeClass::Base => sizes.size_for(None),
        FontSizeClass::Heading(level) => sizes.size_for(Some(level)),
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [file] [tree|lines|locate <offset>]");
    eprintln!(
        "Without a file, default_file from {} is opened",
        Config::config_path().display()
    );
    process::exit(1);
}

fn run(session: &Session, command: Command, config: &Config) {
    match command {
        Command::Tree => print!("{}", normalize(session.text(), session.root())),
        Command::Lines => {
            for (idx, line) in session.lines().iter().enumerate() {
                let text = line.span.slice(session.text());
                println!(
                    "{idx:>4} {:>5.1}pt #{} {:?}",
                    point_size(&config.font_sizes, line.font_size),
                    line.block_id,
                    String::from_utf8_lossy(text)
                );
            }
        }
        Command::Locate(offset) => {
            let id = session.locate_block_at(offset);
            match session.root().find(id) {
                Some(block) => println!(
                    "{id} {} [{}..{}]",
                    block.block_type, block.span.start, block.span.end
                ),
                None => println!("{id}"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("cranium-cli", String::as_str);

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // A leading command word means the file comes from config
    let rest = args.get(1..).unwrap_or_default();
    let (file, command_args): (PathBuf, &[String]) = match rest.first() {
        Some(arg) if !Command::is_command_word(arg) => (PathBuf::from(arg), &rest[1..]),
        _ => match &config.default_file {
            Some(path) => (path.clone(), rest),
            None => {
                eprintln!("Error: No file provided and no default_file configured");
                usage(program);
            }
        },
    };

    let command = match Command::parse(command_args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(program);
        }
    };

    let options = SessionOptions {
        cursor_step: cursor_step(config.cursor_movement),
    };
    let mut session = Session::open(&file, options)
        .with_context(|| format!("Failed to open '{}'", file.display()))?;

    run(&session, command, &config);
    session.close();
    Ok(())
}
