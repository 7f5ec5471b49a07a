use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use activities::database::seed;

fn main() {
    dotenv().ok();

    let path = match env::args().nth(1).or_else(|| env::var("ACTIVITIES_SEED_PATH").ok()) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("usage: check_seed <seed.json> (or set ACTIVITIES_SEED_PATH)");
            std::process::exit(2);
        }
    };

    match seed::load_seed_file(&path) {
        Ok(catalog) => {
            for (name, activity) in &catalog {
                println!(
                    "{}: {}/{} enrolled ({} spots left)",
                    name,
                    activity.participants.len(),
                    activity.max_participants,
                    activity.spots_left()
                );
            }
            println!("seed ok: activities={}", catalog.len());
        }
        Err(e) => {
            eprintln!("seed check failed: {}", e);
            std::process::exit(1);
        }
    }
}
