use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use passgen::session::{Surface, View};
use passgen::utils::{format_millis, mask_string, now_millis};
use passgen::{CharClass, Config, Session, SqliteStore, Translations};

#[derive(Parser)]
#[command(name = "passgen", version, about = "Generate passwords and keep a short local history")]
struct Cli {
    /// SQLite file holding the history
    #[arg(long, env = "PASSGEN_DB")]
    db: Option<PathBuf>,

    /// Label language (en, pl)
    #[arg(long, env = "PASSGEN_LANG")]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new password and add it to history
    Generate(GenerateArgs),
    /// List stored passwords, most recent first
    History {
        /// Show passwords as asterisks
        #[arg(long)]
        mask: bool,
    },
    /// Remove a history entry by id
    Remove { id: i64 },
    /// Remove every history entry
    Clear,
    /// Remove entries older than 24 hours
    Sweep,
}

#[derive(Args)]
struct GenerateArgs {
    /// Password length (1-50)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=50))]
    length: Option<u8>,
    /// Leave out lowercase letters
    #[arg(long)]
    no_lower: bool,
    /// Leave out uppercase letters
    #[arg(long)]
    no_upper: bool,
    /// Leave out digits
    #[arg(long)]
    no_digits: bool,
    /// Include special characters
    #[arg(long)]
    special: bool,
}

/// Plain-text render surface
struct Terminal {
    tr: Translations,
    show_current: bool,
    mask: bool,
}

impl Terminal {
    fn print_current(&self, view: &View<'_>) {
        let policy = &view.policy;
        let classes: Vec<&str> = policy
            .enabled_classes()
            .map(|c| match c {
                CharClass::Lowercase => self.tr.get("class_lowercase"),
                CharClass::Uppercase => self.tr.get("class_uppercase"),
                CharClass::Digits => self.tr.get("class_digits"),
                CharClass::Special => self.tr.get("class_special"),
            })
            .collect();

        println!("{}:", self.tr.get("generated_password"));
        match view.password {
            Some(password) => println!("  {}", password),
            None => println!("  ({})", self.tr.get("no_password")),
        }
        println!(
            "  {}: {}  [{}]",
            self.tr.get("password_length"),
            policy.length,
            classes.join(" ")
        );
        println!("  {}", self.tr.strength(view.strength));
        println!(
            "  {}: {}",
            self.tr.get("crack_time"),
            self.tr.crack_time(view.summary.crack_time)
        );
        println!(
            "  {}: {:.2} {}",
            self.tr.get("entropy"),
            view.summary.entropy_bits,
            self.tr.get("bits_per_character")
        );
    }

    fn print_history(&self, view: &View<'_>) {
        println!("{}:", self.tr.get("recent_passwords"));
        if view.history.is_empty() {
            println!("  {}", self.tr.get("no_saved_passwords"));
            return;
        }
        for record in view.history {
            let password = if self.mask {
                mask_string(&record.password)
            } else {
                record.password.clone()
            };
            println!(
                "  {}  {}  {}  {} {}  {}",
                record.id,
                format_millis(record.id),
                password,
                record.length,
                self.tr.get("characters"),
                self.tr.strength(record.strength)
            );
        }
    }
}

impl Surface for Terminal {
    fn render(&mut self, view: &View<'_>) {
        if self.show_current {
            self.print_current(view);
            println!();
        }
        self.print_history(view);
    }
}

fn build_config(cli: &Cli) -> passgen::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(db) = &cli.db {
        config.database_path = db.clone();
    }
    if let Some(lang) = &cli.lang {
        config.set_language(lang)?;
    }
    if let Command::Generate(args) = &cli.command {
        let policy = &mut config.default_policy;
        if let Some(length) = args.length {
            policy.set_length(usize::from(length));
        }
        policy.lowercase = !args.no_lower;
        policy.uppercase = !args.no_upper;
        policy.digits = !args.no_digits;
        policy.special = args.special;
        policy.normalize();
    }
    Ok(config)
}

fn run(cli: Cli) -> passgen::Result<()> {
    let config = build_config(&cli)?;
    let tr = Translations::for_language(&config.language)?;
    let store = SqliteStore::open(&config.database_path)?;

    let mut terminal = Terminal {
        tr,
        show_current: false,
        mask: false,
    };

    let mut session = match cli.command {
        Command::Generate(_) => {
            terminal.show_current = true;
            Session::start(&config, store)
        }
        Command::History { mask } => {
            terminal.mask = mask;
            Session::open(&config, store)
        }
        Command::Remove { id } => {
            let mut session = Session::open(&config, store);
            let removed = session.remove(id);
            println!("{}: {}\n", terminal.tr.get("removed_entries"), removed);
            session
        }
        Command::Clear => {
            let mut session = Session::open(&config, store);
            session.clear_history();
            session
        }
        Command::Sweep => {
            let mut session = Session::open(&config, store);
            let swept = session.sweep(now_millis());
            println!("{}: {}\n", terminal.tr.get("swept_entries"), swept);
            session
        }
    };

    if !session.history().is_persisted() {
        log::warn!("History changes were not saved to {}", config.database_path.display());
    }

    session.render(&mut terminal, now_millis());
    session.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("passgen: {}", e);
            ExitCode::FAILURE
        }
    }
}
