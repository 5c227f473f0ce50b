/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    error::Error,
    io::{BufWriter, Write},
    process::ExitCode,
};

use image::RgbaImage;

fn to_argb(img: &RgbaImage) -> Vec<u32> {
    img.pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
        })
        .collect()
}

fn write_words<W: Write>(writer: &mut W, words: &[u32]) -> std::io::Result<()> {
    if cfg!(target_endian = "little") {
        writer.write_all(bytemuck::cast_slice(words))
    } else {
        words
            .iter()
            .try_for_each(|word| writer.write_all(&word.to_le_bytes()))
    }
}

fn convert(img_path: &str, output_path: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let img = image::ImageReader::open(img_path)?.decode()?.to_rgba8();
    let (width, height) = img.dimensions();

    let file = std::fs::File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_words(&mut writer, &to_argb(&img))?;
    writer.flush()?;

    Ok((width, height))
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("png_to_rust", String::as_str)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <image.png> <output.bin>", program_name(&args));
        return ExitCode::from(2);
    }

    match convert(&args[1], &args[2]) {
        Ok((width, height)) => {
            println!("Wrote {}x{} image data to {}", width, height, args[2]);
            println!("pub const LOGO_WIDTH: u32 = {width};");
            println!("pub const LOGO_HEIGHT: u32 = {height};");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {err}", args[1]);
            ExitCode::FAILURE
        }
    }
}
