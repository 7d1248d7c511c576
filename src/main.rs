//! Drift - A terminal scatter-plot viewer for translated 2D point sets.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drift::app::App;
use drift::data::PointReader;
use drift::{ui, util};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(
    about = "A terminal scatter-plot viewer for translated 2D point sets",
    long_about = None
)]
struct Args {
    /// Path to the point file (one `x y` pair per line)
    file: PathBuf,

    /// X offset applied to every point
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    dx: f64,

    /// Y offset applied to every point
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    dy: f64,

    /// Print the before/after point table to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Drift");
    }

    // Load fully before any terminal setup; a load error aborts with no chart.
    let points = match PointReader::read_file(&args.file) {
        Ok(points) => points,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    let app = App::new(args.file.clone(), points, (args.dx, args.dy));

    if args.print {
        print!(
            "{}",
            util::format_point_table(
                &app.original,
                &app.translated,
                app.translation,
                Some(&app.file_name()),
            )
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Drift exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Layer visibility
                    (KeyModifiers::NONE, KeyCode::Char('o')) => {
                        app.toggle_original();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('m')) => {
                        app.toggle_translated();
                    },

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        match util::copy_point_table(
                            &app.original,
                            &app.translated,
                            app.translation,
                            Some(&app.file_name()),
                        ) {
                            Ok(_) => app.status = "Point table copied!".to_string(),
                            Err(e) => app.status = format!("Copy failed: {}", e),
                        }
                    },

                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status =
                            "Help: q=quit, o=toggle initial, m=toggle moved, T=theme, c=copy table"
                                .to_string();
                    },

                    _ => {},
                }
            }
        }
    }
}
