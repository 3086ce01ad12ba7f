use clap::{App, AppSettings, Arg};
use statusmap::logging::init_logging;
use statusmap::{
    render_entry, OutputFormat, ServerStatus, StatusEntry, StatusOptions, StatusResolver,
};
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    let matches = App::new("statusmap")
        .version("0.1.0")
        .about("Resolve HTTP and gateway status names")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .help("Path to a statusmap.toml (default: ./statusmap.toml)")
                .required(false),
        )
        .subcommand(
            App::new("resolve")
                .about("Resolve one or more symbolic status names")
                .arg(
                    Arg::new("name")
                        .takes_value(true)
                        .multiple_values(true)
                        .help("Status name, e.g. NOT_FOUND")
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print each status as a JSON object"),
                ),
        )
        .subcommand(
            App::new("list")
                .about("List every known status")
                .arg(
                    Arg::new("extension")
                        .long("extension")
                        .help("Only list the gateway extension statuses"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print each status as a JSON object"),
                ),
        )
        .get_matches();

    let config_path = matches.value_of("config").map(Path::new);
    let options = match StatusOptions::load(config_path) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("statusmap: {}", e);
            process::exit(2);
        }
    };
    init_logging(options.log_level.as_deref());
    debug!(
        path = %config_path.unwrap_or(Path::new(statusmap::CONFIG_FILE)).display(),
        format = ?options.format(),
        "configuration loaded"
    );

    let resolver = StatusResolver::global();

    match matches.subcommand() {
        Some(("resolve", matches)) => {
            let format = pick_format(&options, matches.is_present("json"));
            let mut failed = false;
            for name in matches.values_of("name").into_iter().flatten() {
                match resolver.resolve(name) {
                    Ok(entry) => print_entry(name, &entry, format),
                    Err(e) => {
                        debug!(status = name, "lookup failed");
                        eprintln!("statusmap: {}", e);
                        failed = true;
                    }
                }
            }
            if failed {
                process::exit(1);
            }
        }
        Some(("list", matches)) => {
            let format = pick_format(&options, matches.is_present("json"));
            if matches.is_present("extension") {
                for status in ServerStatus::ALL {
                    print_entry(status.name(), &StatusEntry::from(*status), format);
                }
            } else {
                for (name, entry) in resolver.entries() {
                    print_entry(name, &entry, format);
                }
            }
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn pick_format(options: &StatusOptions, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        options.format()
    }
}

fn print_entry(name: &str, entry: &StatusEntry, format: OutputFormat) {
    match render_entry(name, entry, format) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("statusmap: failed to render {}: {}", name, e);
            process::exit(1);
        }
    }
}
