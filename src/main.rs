use clap::Parser;
use picker::core::config::{self, CliOverrides, PickerConfig};
use picker::core::state::App;
use picker::{LogLevel, OutputFormat, format_choice, parse_options, tui};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "picker", about = "Choose one option from a list in the terminal")]
struct Args {
    /// Options to choose from (default: configured menu, then lines from stdin).
    /// These are always printed as chosen; only options of a configured menu
    /// can open another menu.
    options: Vec<String>,

    /// Panel title
    #[arg(short, long)]
    title: Option<String>,

    /// Open a menu defined in the config file
    #[arg(short, long)]
    menu: Option<String>,

    /// Config file (default: ~/.picker/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to print the choice
    #[arg(short, long, default_value_t, value_enum)]
    output: OutputFormat,

    /// Disable j/k navigation
    #[arg(long)]
    no_vim: bool,

    /// Log file (default: ~/.picker/picker.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(path) = args.log_file.clone().or_else(config::log_path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(log_file) = File::create(&path) {
            let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
        }
    }

    log::info!("Picker starting up");

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("{}", e);
        eprintln!("picker: {e}; using defaults");
        PickerConfig::default()
    });

    let mut options = args.options;
    let has_menu = args.menu.is_some() || file_config.general.default_menu.is_some();
    if options.is_empty() && !has_menu && !std::io::stdin().is_terminal() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        options = parse_options(&input);
        log::info!("Read {} option(s) from stdin", options.len());
    }

    let cli = CliOverrides {
        title: args.title,
        menu: args.menu,
        no_vim: args.no_vim,
        options,
    };
    let resolved = config::resolve(&file_config, &cli);

    let (tx, rx) = mpsc::channel();
    let mut app = App::new(resolved.menus.clone(), tx);
    if !tui::open_initial(&mut app, &resolved) {
        eprintln!("picker: nothing to choose from (pass options, --menu, or pipe lines on stdin)");
        return Ok(ExitCode::from(2));
    }

    match tui::run(app, &resolved, rx)? {
        Some(choice) => {
            println!("{}", format_choice(&choice, args.output)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            log::info!("Canceled");
            Ok(ExitCode::from(1))
        }
    }
}
