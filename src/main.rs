use logbook::application::init;
use logbook::cli::menu;
use logbook::error::Result;
use logbook::infrastructure::{resolve_root, ChartRenderer, Config, WorkbookRepository};
use std::io;

fn main() {
    match run() {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<()> {
    let root = resolve_root()?;
    let config = Config::load_from_dir(&root)?;
    let repository = WorkbookRepository::new(config.storage_path(&root));
    let chart = ChartRenderer::new(config.chart_path(&root));

    // Create the workbook on first run; existing files are left untouched
    init(&repository)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu::run(&mut input, &mut out, &repository, &chart)
}
