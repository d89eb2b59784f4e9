use clap::Parser;

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
}

fn main() {
    let cli = Cli::parse();
    println!("Hello, {}!", cli.name);
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
