use clap::Parser;
use rankbook::cli::{Cli, Command};
use rankbook::config::Config;
use rankbook::import::Importer;
use rankbook::report::{self, RankingView};
use rankbook::store::Store;

fn main() {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.db, cli.log) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error resolving paths: {e}");
            std::process::exit(1);
        }
    };

    let mut store = match Store::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening database '{}': {e}", config.db_path.display());
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Import(args) => {
            let mut importer = Importer::new(&mut store, config.log_path.clone());

            match importer.process(&args.file) {
                Ok(0) => {
                    println!("No valid players found in '{}'.", args.file.display());
                }
                Ok(count) => {
                    println!("{count} players imported successfully.");
                }
                Err(e) => {
                    eprintln!("critical: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Snapshots(args) => {
            let tags = store.list_import_tags();

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tags).unwrap_or_else(|_| String::from("[]"))
                );
            } else if tags.is_empty() {
                println!("No snapshots found. Run 'rankbook import' to create one.");
            } else {
                println!("Snapshots:");
                for tag in tags {
                    println!("  {tag}");
                }
            }
        }
        Command::Show(args) => {
            let tag = match args.tag {
                Some(tag) => tag,
                None => match store.list_import_tags().into_iter().next() {
                    Some(latest) => latest,
                    None => {
                        eprintln!("No snapshots found. Run 'rankbook import' to create one.");
                        std::process::exit(1);
                    }
                },
            };

            let players = store.load_snapshot(&tag);
            let view = RankingView {
                import_tag: &tag,
                players: &players,
            };

            report::print(&view, args.json);
        }
    }
}
