//! Tutorial workbook.
//!
//! Edit this program to complete each lesson, then check your work with
//! `tutorial lesson <LESSON_ID>`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "cli")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
}
