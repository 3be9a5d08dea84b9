use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use brandhub_links::{embed_url, normalize_url, optimize_for_width, video_kind, VideoKind};
use brandhub_model::{filter_entities, public_view, search, sort_recent, Brand, EntityType};
use brandhub_reconcile::{Reconciler, SyncDirection};
use brandhub_schema::validate_many;
use brandhub_vault::{BackendKind, BrandService, VaultConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("brandhub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Repair, validate and store brand guideline records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML vault configuration"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory for the file backend"),
        )
        .arg(
            Arg::new("memory")
                .long("memory")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Use in-memory storage for this run"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("repair")
                .about("Repair a brand document (object or array) and print the result")
                .arg(input_arg())
                .arg(
                    Arg::new("direction")
                        .long("direction")
                        .default_value("top-level")
                        .value_parser(["top-level", "sections"])
                        .help("Which side wins when root fields and sections disagree"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check records against the write gate without repairing them")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List stored brands, most recently updated first")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["brand", "product"])
                        .help("Only brands or only products"),
                )
                .arg(Arg::new("search").long("search").help("Match name or industry"))
                .arg(
                    Arg::new("public")
                        .long("public")
                        .action(ArgAction::SetTrue)
                        .help("Only visible brands"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace stored brands with a JSON export")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write stored brands as a JSON array")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("File to write instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete one brand")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(Command::new("reset").about("Discard every brand and reload the samples"))
        .subcommand(
            Command::new("snapshot")
                .about("Manage restore points")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Snapshot the stored brands")
                        .arg(Arg::new("label").long("label").help("Defaults to \"Snapshot\"")),
                )
                .subcommand(Command::new("list").about("List restore points, newest first"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a restore point")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("restore")
                        .about("Replace stored brands with a restore point")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("normalize-url")
                .about("Show the direct form of a shared link")
                .arg(Arg::new("url").required(true))
                .arg(
                    Arg::new("width")
                        .long("width")
                        .value_parser(value_parser!(u32))
                        .help("Also print a preview URL sized to this width"),
                ),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .default_value("-")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file, or - for stdin")
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn vault_config(matches: &ArgMatches) -> Result<VaultConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => VaultConfig::from_file(path)?,
        None => VaultConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir).with_backend(BackendKind::File);
    }
    if matches.get_flag("memory") {
        config = config.with_backend(BackendKind::Memory);
    }
    Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = read_input(path)?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_brand_line(brand: &Brand) {
    let kind = match brand.entity_type {
        EntityType::Brand => "brand",
        EntityType::Product => "product",
    };
    println!("{}\t{}\t{}\t{}", brand.id, kind, brand.name, brand.industry);
}

fn repair_command(args: &ArgMatches) -> Result<ExitCode> {
    let document = read_json(input_path(args))?;
    let direction: SyncDirection = args
        .get_one::<String>("direction")
        .map_or(Ok(SyncDirection::default()), |d| d.parse())?;
    let reconciler = Reconciler::new();

    let repaired = match &document {
        Value::Array(items) => {
            let brands = items
                .iter()
                .map(|item| reconciler.repair(item, direction))
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_string_pretty(&brands)?
        }
        other => serde_json::to_string_pretty(&reconciler.repair(other, direction)?)?,
    };
    println!("{repaired}");
    Ok(ExitCode::SUCCESS)
}

fn validate_command(args: &ArgMatches) -> Result<ExitCode> {
    let document = read_json(input_path(args))?;
    let records = match document {
        Value::Array(items) => items,
        other => vec![other],
    };

    let summary = validate_many(&records);
    println!("{}/{} records valid", summary.valid, summary.total);
    if summary.missing_logo > 0 {
        println!("{} without a main logo", summary.missing_logo);
    }
    for failure in &summary.failures {
        let id = failure.id.as_deref().unwrap_or("-");
        println!("  #{} ({id}): {}", failure.index, failure.reason);
    }
    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn normalize_command(args: &ArgMatches) -> ExitCode {
    let url = args.get_one::<String>("url").map(String::as_str);
    println!("{}", normalize_url(url));
    if let Some(width) = args.get_one::<u32>("width") {
        println!("{}", optimize_for_width(url, *width));
    }
    match video_kind(url) {
        VideoKind::YouTube | VideoKind::Vimeo => {
            println!("embed: {}", embed_url(url.unwrap_or_default()));
        }
        VideoKind::Direct | VideoKind::Unsupported => {}
    }
    ExitCode::SUCCESS
}

fn input_path(args: &ArgMatches) -> &Path {
    args.get_one::<PathBuf>("input")
        .map_or(Path::new("-"), PathBuf::as_path)
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    match args.get_one::<String>(name) {
        Some(value) => Ok(value),
        None => bail!("missing <{name}>"),
    }
}

async fn store_command(name: &str, args: &ArgMatches, service: &BrandService) -> Result<ExitCode> {
    match name {
        "list" => {
            let mut brands = service.fetch_brands().await?;
            sort_recent(&mut brands);
            let mut shown: Vec<&Brand> = match args.get_one::<String>("type").map(String::as_str) {
                Some("product") => filter_entities(&brands, EntityType::Product),
                Some(_) => filter_entities(&brands, EntityType::Brand),
                None => brands.iter().collect(),
            };
            if let Some(query) = args.get_one::<String>("search") {
                let matched: Vec<&str> = search(&brands, query).into_iter().map(|b| b.id.as_str()).collect();
                shown.retain(|b| matched.contains(&b.id.as_str()));
            }
            if args.get_flag("public") {
                let visible: Vec<&str> = public_view(&brands).into_iter().map(|b| b.id.as_str()).collect();
                shown.retain(|b| visible.contains(&b.id.as_str()));
            }
            for brand in shown {
                print_brand_line(brand);
            }
        }
        "import" => {
            let text = read_input(input_path(args))?;
            let imported = service.import_json(&text).await?;
            println!("imported {} brands", imported.report.saved);
            for skipped in &imported.report.skipped {
                println!("  skipped {}: {}", skipped.id, skipped.reason);
            }
        }
        "export" => {
            let json = service.export_json().await?;
            match args.get_one::<PathBuf>("output") {
                Some(path) => std::fs::write(path, json)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        "delete" => {
            let id = required(args, "id")?;
            if !service.delete_brand(id).await? {
                println!("no brand with id {id}");
                return Ok(ExitCode::FAILURE);
            }
            println!("deleted {id}");
        }
        "reset" => {
            let samples = service.factory_reset().await?;
            println!("reset to {} sample brands", samples.len());
        }
        "snapshot" => return snapshot_command(args, service).await,
        other => bail!("unknown command {other}"),
    }
    Ok(ExitCode::SUCCESS)
}

async fn snapshot_command(args: &ArgMatches, service: &BrandService) -> Result<ExitCode> {
    match args.subcommand() {
        Some(("create", sub)) => {
            let label = sub.get_one::<String>("label").map_or("", String::as_str);
            let point = service.create_restore_point(label).await?;
            println!("{}\t{}\t{} brands", point.id, point.label, point.brand_count);
        }
        Some(("list", _)) => {
            for point in service.list_restore_points().await? {
                println!("{}\t{}\t{}\t{} brands", point.id, point.timestamp, point.label, point.brand_count);
            }
        }
        Some(("delete", sub)) => {
            let id = required(sub, "id")?;
            if !service.delete_restore_point(id).await? {
                println!("no restore point with id {id}");
                return Ok(ExitCode::FAILURE);
            }
            println!("deleted {id}");
        }
        Some(("restore", sub)) => {
            let restored = service.restore(required(sub, "id")?).await?;
            println!("restored {} brands", restored.report.saved);
        }
        _ => bail!("snapshot needs a subcommand"),
    }
    Ok(ExitCode::SUCCESS)
}

async fn run(matches: ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("repair", args)) => repair_command(args),
        Some(("validate", args)) => validate_command(args),
        Some(("normalize-url", args)) => Ok(normalize_command(args)),
        Some((name, args)) => {
            let config = vault_config(&matches)?;
            let service = BrandService::from_config(&config);
            store_command(name, args, &service).await
        }
        None => bail!("no command given"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(matches).await {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn global_flags_reach_the_config() {
        let matches = cli()
            .try_get_matches_from(["brandhub", "list", "--data-dir", "/tmp/brands", "--memory"])
            .unwrap();

        let config = vault_config(&matches).unwrap();
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/brands"));
    }

    #[test]
    fn snapshot_requires_a_subcommand() {
        assert!(cli().try_get_matches_from(["brandhub", "snapshot"]).is_err());
    }

    #[test]
    fn direction_is_restricted() {
        let err = cli()
            .try_get_matches_from(["brandhub", "repair", "in.json", "--direction", "sideways"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
