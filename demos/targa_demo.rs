//! Load each TGA file named on the command line, report its size, apply a
//! red and a blue channel mask, then release it.
//!
//! Run: cargo run --example targa_demo -- path/to/image.tga [...]

use std::process::ExitCode;

use zentga::{Channel, Targa, TargaError};

fn run(path: &str) -> Result<(), TargaError> {
    let mut image = Targa::load_from_file(path)?;
    let (width, height) = image.dimensions()?;
    println!(
        "Loaded '{path}', image length: {}, ({width} x {height}) pixels",
        image.image_length()?
    );

    image.apply_mask(Channel::Red, 255)?;
    image.apply_mask(Channel::Blue, 127)?;

    image.release();
    Ok(())
}

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: targa_demo <file.tga> [...]");
        return ExitCode::FAILURE;
    }

    for path in &paths {
        if let Err(e) = run(path) {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
