use base64::{engine::general_purpose, Engine};
use clap::Parser;
use collector::system::{run_collector, Commands};
use extract_core::structs::toml::Output;
use log::info;

mod collector;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML collector
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Base64 encoded TOML file
    #[clap(short, long, value_parser)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let args = Args::parse();
    println!("[ios-extract] Starting iOS artifact extraction!");

    if let Some(toml) = args.toml {
        if !toml.is_empty() {
            let collection_results = extract_core::core::parse_toml_file(&toml);
            match collection_results {
                Ok(_) => info!("[ios-extract] Collection success"),
                Err(err) => {
                    println!("[ios-extract] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(data) = args.data {
        if !data.is_empty() {
            let toml_data_results = general_purpose::STANDARD.decode(&data);
            let toml_data = match toml_data_results {
                Ok(results) => results,
                Err(err) => {
                    println!(
                        "[ios-extract] Failed to base64 decode TOML collector {data}, error: {err:?}",
                    );
                    return;
                }
            };
            let collection_results = extract_core::core::parse_toml_data(&toml_data);
            match collection_results {
                Ok(_) => info!("[ios-extract] Collection success"),
                Err(err) => {
                    println!("[ios-extract] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(command) = args.command {
        let output = Output {
            name: String::from("local_collector"),
            directory: String::from("./tmp"),
            format: String::from("tsv"),
            compress: false,
            timeline: false,
            logging: Some(String::from("warn")),
        };
        run_collector(&command, output);
    } else {
        println!("[ios-extract] No TOML file, data or command provided!");
        return;
    }
    println!("[ios-extract] Finished iOS artifact extraction!");
}
