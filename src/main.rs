use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - Aviation Weather Report Decoder");
    println!("================================================");
    println!();
    println!("Decode METAR and SPECI aviation weather observation reports into");
    println!("structured data and human-readable text.");
    println!();
    println!("USAGE:");
    println!("    metar-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode raw reports from arguments or stdin (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a report passed as an argument:");
    println!("    metar-decoder decode \"METAR KJFK 161851Z 28016G28KT 10SM FEW250 22/11 A3001\"");
    println!();
    println!("    # Decode an archived report against its observation month:");
    println!("    metar-decoder decode --month 7 --year 1998 \"KJFK 041851Z 18010KT 10SM CLR 24/18 A3000\"");
    println!();
    println!("    # Stream reports from a file, one per line, as JSON:");
    println!("    metar-decoder decode --format json < reports.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-decoder <COMMAND> --help");
}
