use std::fs::{self, File};
use std::path::Path;

use dropdown_lib::item::items_from_json;
use dropdown_lib::{Dropdown, DropdownConfig, Item};
use dropdown_tui::{App, TuiError, sample};
use simplelog::{Config, LevelFilter, WriteLogger};

const SAMPLE_SIZE: usize = 10_000;
const LOG_FILE: &str = "dropdown-tui.log";
/// Keys listed per change in the log; the count is always logged.
const LOGGED_KEYS: usize = 20;

fn main() {
    match File::create(LOG_FILE) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create {}: {}", LOG_FILE, e),
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TuiError> {
    let mut args = std::env::args().skip(1);
    let data = match args.next() {
        Some(path) => load_items(Path::new(&path))?,
        None => sample::customers(SAMPLE_SIZE),
    };
    let config = match args.next() {
        Some(path) => DropdownConfig::from_json(&fs::read_to_string(path)?)?,
        None => DropdownConfig::default(),
    };
    log::info!("[main] {} items, {:?}", data.len(), config);

    let key_field = config.key_field.clone();
    let dropdown = Dropdown::new(config, data).on_change(move |selected: &[Item]| {
        let keys: Vec<String> = selected
            .iter()
            .take(LOGGED_KEYS)
            .map(|item| dropdown_lib::item::key_of(item, &key_field).to_string())
            .collect();
        log::info!("[on_change] {} selected: [{}]", selected.len(), keys.join(", "));
    });

    App::new(dropdown).run()
}

fn load_items(path: &Path) -> Result<Vec<Item>, TuiError> {
    let json = fs::read_to_string(path)?;
    Ok(items_from_json(&json)?)
}
