//! CLI tool for xlheader - renders a row header window and outputs JSON
//!
//! Usage:
//!   xlheader_cli <rows> <start> <end>                 # Uniform 20px rows
//!   xlheader_cli <rows> <start> <end> --height 24     # Custom row height
//!   xlheader_cli <rows> <start> <end> --select 3:5    # Select rows 3..=5

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};
use std::rc::Rc;
use xlheader::layout::{Grid, RowWindow, SheetLayout};
use xlheader::types::{Region, DEFAULT_ROW_HEIGHT};
use xlheader::{RowHeader, RowHeaderProps};

const USAGE: &str = "Usage: xlheader_cli <rows> <start> <end> [--height N] [--select A:B]";

fn parse_u32(value: &str, what: &str) -> u32 {
    match value.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid {}: {} ({})", what, value, e);
            std::process::exit(1);
        }
    }
}

fn parse_range(value: &str) -> (u32, u32) {
    match value.split_once(':') {
        Some((a, b)) => (parse_u32(a, "selection start"), parse_u32(b, "selection end")),
        None => {
            let row = parse_u32(value, "selection");
            (row, row)
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let num_rows = parse_u32(&args[1], "row count");
    let start = parse_u32(&args[2], "window start");
    let end = parse_u32(&args[3], "window end");

    let mut height = DEFAULT_ROW_HEIGHT;
    let mut selection = Vec::new();
    let mut rest = args[4..].iter();
    while let Some(flag) = rest.next() {
        let value = match rest.next() {
            Some(v) => v,
            None => {
                eprintln!("Missing value for {}\n{}", flag, USAGE);
                std::process::exit(1);
            }
        };
        match flag.as_str() {
            "--height" => {
                height = match value.parse::<f32>() {
                    Ok(h) if h.is_finite() && h > 0.0 => h,
                    _ => {
                        eprintln!("Invalid height: {}", value);
                        std::process::exit(1);
                    }
                };
            }
            "--select" => {
                let (a, b) = parse_range(value);
                selection.push(Region::row_range(a, b));
            }
            other => {
                eprintln!("Unknown option: {}\n{}", other, USAGE);
                std::process::exit(1);
            }
        }
    }

    let window = match RowWindow::new(start, end) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(num_rows, 1, height));
    let props = RowHeaderProps::new(grid, window, Rc::new(|_: u32, _: f32| {}))
        .with_selection(selection);
    let header = RowHeader::new(props);

    let json = match serde_json::to_string_pretty(&header.render()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    io::stdout().write_all(json.as_bytes()).unwrap();
    println!();
}
