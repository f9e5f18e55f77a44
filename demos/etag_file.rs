//! Prints the etag of each file given on the command line.
//!
//! Run with:
//!     cargo run --example etag_file -- /path/to/file [more files...]

use std::env;

use qetag::{ByteSource, EtagConfig, EtagEngine, FileSource, block_count};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    let config = EtagConfig::default();
    println!("Hashing with {} workers\n", config.workers());
    let engine = EtagEngine::new(config);

    for path in paths {
        let source = FileSource::open(&path)?;
        let size = source.size();
        let etag = engine.compute(&source)?;

        println!(
            "{}  {} ({} bytes, {} blocks, {:?})",
            etag,
            path,
            size,
            block_count(size),
            etag.kind()
        );
    }

    Ok(())
}
