//! Builds a small map of letters, prints what the map reports about it, and tears it down again.
//!
//! Set `LLRB_LOG` to `trace` to see the map's own records of each mutation.

use llrb::Map;
use log::{info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::error::Error;

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let level = match env::var("LLRB_LOG") {
        Ok(level) => level.parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    };

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut map = Map::new();

    for (key, value) in vec![("C", 3), ("A", 1), ("G", 5), ("H", 6), ("B", 2), ("F", 4)] {
        map.insert(key, value);
    }

    info!("size: {}", map.len());
    info!("height: {:?}", map.height());
    info!("contains B: {}", map.contains_key(&"B"));
    info!("value of C: {:?}", map.get(&"C"));
    info!("keys in [B, G]: {:?}", map.keys_in_range(&"B", &"G"));
    info!("keys by level: {:?}", map.keys_level_order());
    info!("map: {:?}", map);

    match map.delete(&"B") {
        Some((key, value)) => info!("deleted {} => {}", key, value),
        None => warn!("B was not in the map"),
    }

    info!("size: {}", map.len());
    info!("keys: {:?}", map.keys().collect::<Vec<_>>());

    let (min, _) = map.delete_min()?;
    let (max, _) = map.delete_max()?;
    info!("deleted min {} and max {}, {} left", min, max, map.len());

    while let Ok((key, _)) = map.delete_min() {
        info!("drained {}", key);
    }

    if let Err(err) = map.delete_max() {
        info!("{}", err);
    }

    Ok(())
}
