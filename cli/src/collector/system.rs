use super::commands::CommandArgs;
use clap::Subcommand;
use extract_core::{
    core::{extract_collection, list_artifacts},
    structs::toml::{Artifacts, ExtractToml, Output, Source},
};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Acquire iOS application artifacts from an extraction
    Acquire {
        #[command(subcommand)]
        artifact: Option<CommandArgs>,
        /// iOS version of the extraction. Ex: 17.3.1
        #[arg(long)]
        ios_version: String,
        /// Root directory of the extraction
        #[arg(long, default_value_t = String::from("."))]
        path: String,
        /// UTC or a fixed offset such as +02:00
        #[arg(long, default_value = None)]
        timezone: Option<String>,
        /// Output format. TSV or JSON or JSONL.
        #[arg(long, default_value_t = String::from("TSV"))]
        format: String,
        /// Optional output directory for storing results
        #[arg(long, default_value_t = String::from("./tmp"))]
        output_dir: String,
        /// GZIP Compress results
        #[arg(long)]
        compress: bool,
        /// Also write timeline entries
        #[arg(long)]
        timeline: bool,
    },
    /// List supported artifacts
    List {},
}

/// Run the collector and parse specified artifacts
pub(crate) fn run_collector(command: &Commands, output: Output) {
    match command {
        Commands::Acquire {
            artifact,
            ios_version,
            path,
            timezone,
            format,
            output_dir,
            compress,
            timeline,
        } => {
            let arti = match artifact {
                Some(result) => result,
                None => {
                    println!("No artifact provided");
                    return;
                }
            };

            let (artifact_name, alt_file) = arti.artifact();
            let mut collector = ExtractToml {
                source: Source {
                    ios_version: ios_version.clone(),
                    path: path.clone(),
                    timezone: timezone.clone(),
                },
                output,
                artifacts: vec![Artifacts {
                    artifact_name: artifact_name.to_string(),
                    alt_file,
                }],
            };
            collector.output.compress = *compress;
            collector.output.timeline = *timeline;

            if !format.is_empty() {
                collector.output.format = format.to_lowercase();
            }
            if !output_dir.is_empty() {
                collector.output.directory = output_dir.to_string();
            }

            println!(
                "[ios-extract] Writing output to: {}/{}",
                collector.output.directory, collector.output.name
            );
            if let Err(err) = extract_collection(&collector) {
                println!("[ios-extract] Failed to collect {artifact_name}: {err:?}");
            }
        }
        Commands::List {} => {
            for info in list_artifacts() {
                let minimum = info.minimum_version.unwrap_or_else(|| String::from("any"));
                println!(
                    "{}\t{}\tiOS {minimum}\t{}",
                    info.name, info.category, info.description
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run_collector, Commands};
    use crate::collector::commands::CommandArgs;
    use extract_core::structs::toml::Output;
    use std::path::PathBuf;

    fn output() -> Output {
        Output {
            name: String::from("cli_test"),
            directory: String::from("./tmp"),
            format: String::from("json"),
            compress: false,
            timeline: false,
            logging: Some(String::from("warn")),
        }
    }

    #[test]
    fn test_run_collector_last_query() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("../core/tests/test_data/ios");

        let command = Commands::Acquire {
            artifact: Some(CommandArgs::KleinanzeigenLastQuery { alt_file: None }),
            ios_version: String::from("17.3.1"),
            path: test_location.display().to_string(),
            timezone: None,
            format: String::from("JSON"),
            output_dir: String::from("./tmp"),
            compress: false,
            timeline: false,
        };
        run_collector(&command, output());
        assert!(std::path::Path::new("./tmp/cli_test/kleinanzeigen-last-query.json").is_file());
    }

    #[test]
    fn test_run_collector_list() {
        run_collector(&Commands::List {}, output());
    }
}
