use clap::Parser;

use keyglob::matches_any;

#[derive(Parser)]
#[command(name = "keyglob")]
#[command(about = "Test a string against anchored wildcard key patterns", long_about = None)]
#[command(version)]
struct Cli {
    /// String to test
    candidate: String,

    /// Key patterns; an argument may hold several, separated by commas or newlines
    patterns: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let patterns: Vec<&str> = cli.patterns.iter()
        .flat_map(|arg| arg.split(|c| c == ',' || c == '\n'))
        .collect();

    println!("{}", matches_any(&cli.candidate, &patterns));
}
