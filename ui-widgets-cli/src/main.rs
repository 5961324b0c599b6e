use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ui_widgets_core::{
    GalleryConfig, NavigationIntent, Pagination, Slot, format_intent, format_slots,
};

#[derive(Parser)]
#[command(name = "ui-widgets-cli")]
#[command(about = "Inspect the slot sequences and navigation of the pagination widget")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slots rendered for a page count and current page
    Pagination {
        /// Total number of pages (zero or less hides the control)
        #[arg(allow_hyphen_values = true)]
        pages: i64,
        /// Current page, 1-indexed
        #[arg(allow_hyphen_values = true)]
        current: i64,
        /// Print the slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Activate a slot and print the navigation intent it emits
    Navigate {
        #[arg(allow_hyphen_values = true)]
        pages: i64,
        #[arg(allow_hyphen_values = true)]
        current: i64,
        /// `back`, `forward`, `ellipsis` or a page number
        slot: String,
        /// Print the intent as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective gallery configuration
    Gallery {
        /// Configuration file (defaults to gallery.json in the config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Find the rendered slot the user asked to activate
fn find_slot(slots: &[Slot], name: &str) -> Result<Slot, String> {
    let found = match name {
        "back" => slots.iter().find(|slot| matches!(slot, Slot::Back { .. })),
        "forward" => slots.iter().find(|slot| matches!(slot, Slot::Forward { .. })),
        "ellipsis" | "…" => slots.iter().find(|slot| **slot == Slot::Ellipsis),
        _ => {
            let page: i64 = name
                .parse()
                .map_err(|_| format!("'{}' is not a slot name or page number", name))?;
            slots
                .iter()
                .find(|slot| matches!(slot, Slot::Page { index, .. } if *index == page))
        }
    };

    found
        .copied()
        .ok_or_else(|| format!("No '{}' slot is rendered", name))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pagination {
            pages,
            current,
            json,
        } => {
            let slots = Pagination::new(pages, current).slots();
            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("(no pagination)");
            } else {
                println!("{}", format_slots(&slots));
            }
        }
        Commands::Navigate {
            pages,
            current,
            slot,
            json,
        } => {
            let pagination = Pagination::new(pages, current);
            let slots = pagination.slots();
            let target = match find_slot(&slots, &slot) {
                Ok(target) => target,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            log::debug!("Activating {:?} on page {} of {}", target, current, pages);

            let intent: Option<NavigationIntent> = pagination.activate(&target);
            if json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!("{}", format_intent(intent));
            }
        }
        Commands::Gallery { config } => match GalleryConfig::load_or_default(config.as_deref()) {
            Ok(config) => println!("{}", serde_json::to_string_pretty(&config)?),
            Err(e) => {
                eprintln!("Failed to load gallery configuration: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
