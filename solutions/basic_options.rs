use clap::Parser;

#[derive(Parser)]
#[command(name = "cli")]
struct Cli {
    /// Who to greet.
    #[arg(long, default_value = "World")]
    name: String,
}

fn main() {
    let cli = Cli::parse();
    println!("Hello, {}!", cli.name);
}
