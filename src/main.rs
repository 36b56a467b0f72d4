use std::io;
use std::process;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use carpool::config::Config;
use carpool::parse::load_points;
use carpool::pipeline;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        let mut chain = err.chain().into_iter();
        if let Some(message) = chain.next() {
            eprintln!("error: {}", message);
        }
        for cause in chain {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run() -> Result<(), carpool::Error> {
    let config = Config::from_env()?;
    info!("Using {:?}", config);

    let points = load_points(&config.points_path)?;

    let stdout = io::stdout();
    let out = stdout.lock();

    match config.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            pipeline::run(&config, points, &mut rng, Uuid::new_v4, out)
        }
        None => pipeline::run(&config, points, &mut rand::thread_rng(), Uuid::new_v4, out),
    }
}
