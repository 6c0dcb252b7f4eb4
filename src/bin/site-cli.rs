use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use rentrib_site::i18n::{Catalog, Locale};
use rentrib_site::routing::{Action, LocaleResolver, DEFAULT_BYPASS_PREFIXES};

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspection and testing CLI for the RentRibAthens site", long_about = None)]
struct Cli {
    /// Directory holding el.json and en.json; embedded dictionaries when omitted
    #[arg(short, long, global = true)]
    messages_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the locale routing decision for request paths
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Look up a dotted translation key
    Translate { locale: String, key: String },
    /// List keys of the default dictionary missing from other locales
    Audit,
    /// Submit the contact form to a running server
    Contact {
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { paths } => {
            let resolver = LocaleResolver::new(DEFAULT_BYPASS_PREFIXES);
            for path in paths {
                match resolver.resolve(&path) {
                    Action::Bypass => println!("{path}\tbypass"),
                    Action::Redirect(to) => println!("{path}\tredirect\t{to}"),
                    Action::Rewrite(to) => println!("{path}\trewrite\t{to}"),
                }
            }
        }
        Commands::Translate { locale, key } => {
            let locale: Locale = locale.parse()?;
            let catalog = load_catalog(cli.messages_dir)?;
            match catalog.translate(locale, &key) {
                Some(Value::String(text)) => println!("{text}"),
                Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
                None => {
                    eprintln!("No translation for '{key}' in {locale} or {}", Locale::DEFAULT);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Audit => {
            let catalog = load_catalog(cli.messages_dir)?;
            let mut complete = true;
            for locale in Locale::ALL.into_iter().filter(|l| !l.is_default()) {
                let missing = catalog.missing_keys(locale);
                if missing.is_empty() {
                    println!("{locale}: complete");
                    continue;
                }
                complete = false;
                println!("{locale}: {} missing (falls back to {})", missing.len(), Locale::DEFAULT);
                for key in missing {
                    println!("  {key}");
                }
            }
            if !complete {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Contact {
            url,
            name,
            phone,
            message,
            email,
            date,
            time,
        } => {
            let body = json!({
                "name": name,
                "phone": phone,
                "message": message,
                "email": email,
                "date": date,
                "time": time,
            });
            let res = reqwest::Client::new()
                .post(format!("{}/api/contact", url.trim_end_matches('/')))
                .json(&body)
                .send()
                .await?;
            if !print_response(res).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_catalog(dir: Option<PathBuf>) -> Result<Catalog, Box<dyn std::error::Error>> {
    Ok(match dir {
        Some(dir) => Catalog::load(&dir)?,
        None => Catalog::embedded()?,
    })
}

/// Print the response body; returns whether the status was a success.
async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let body = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };
    if status.is_success() {
        println!("{body}");
    } else {
        eprintln!("Error: server returned status {status}");
        eprintln!("{body}");
    }
    Ok(status.is_success())
}
