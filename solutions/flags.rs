use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "cli")]
struct Cli {
    /// Who to greet.
    #[arg(long, default_value = "World")]
    name: String,

    #[arg(long)]
    int_option: Option<i64>,

    #[arg(long)]
    float_option: Option<f64>,

    #[arg(long)]
    bool_option: Option<bool>,

    /// Greet in capitals.
    #[arg(long)]
    shout: bool,

    /// Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let greeting = format!("Hello, {}!", cli.name);
    if cli.shout {
        println!("{}", greeting.to_uppercase());
    } else {
        println!("{greeting}");
    }
    if cli.verbose > 0 {
        println!("verbosity: {}", cli.verbose);
    }
    if let Some(value) = cli.int_option {
        println!("int: {value}");
    }
    if let Some(value) = cli.float_option {
        println!("float: {value}");
    }
    if let Some(value) = cli.bool_option {
        println!("bool: {value}");
    }
}
