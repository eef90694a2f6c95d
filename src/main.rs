use anyhow::Result;
use clap::Parser;
use contagion_core::config::SimConfig;
use contagion_core::metrics::init_logging;
use contagion_lib::app::App;
use contagion_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Maximum number of ticks in headless mode
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,

    /// RNG seed, overrides `world.seed`
    #[arg(long)]
    seed: Option<u64>,

    /// Population size, overrides `world.population`
    #[arg(long)]
    population: Option<usize>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Log lines would scribble over the alternate screen, so stay quiet there.
    match args.mode {
        Mode::Headless => init_logging("info"),
        Mode::Standard => init_logging("warn"),
    }

    let mut config = SimConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(population) = args.population {
        config.world.population = population;
    }
    config.validate()?;

    match args.mode {
        Mode::Headless => {
            let mut app = App::new(config)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let summary = app.run_headless(args.ticks, &mut out)?;
            summary.write_line(&mut out)?;
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.enter()?;

            let res = match App::new(config) {
                Ok(mut app) => app.run(&mut tui).await,
                Err(e) => Err(e),
            };

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
