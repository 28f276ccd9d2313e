use anyhow::Result;
use clap::Parser;
use skylark_lib::app;
use skylark_lib::App;
use skylark_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulator in
    #[arg(short, long, value_enum, default_value = "play")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the obstacle seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generation episodes to run in demo mode
    #[arg(short, long, default_value_t = 10)]
    generations: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Manual play: one human-controlled agent in the terminal
    Play,
    /// Headless episode batch with scripted controllers
    Demo,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = app::load_config(&args.config);
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    match args.mode {
        Mode::Demo => {
            skylark_core::init_logging();
            app::demo::run(config, args.generations)?;
        }
        Mode::Play => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config)?;
            let res = app.run(&mut tui);

            tui.exit()?;

            match res {
                Ok(()) => println!("Final score: {}", app.world.score),
                Err(e) => eprintln!("Application error: {e}"),
            }
        }
    }

    Ok(())
}
