use book_catalog::{browse, cli, config, error, render};
use book_catalog_common::{Catalog, Presentation};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    book_catalog::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { json, input, idl } => {
            let source = book_catalog::resolve_source(&config, input.as_deref(), idl.as_deref())?;

            let mut catalog = Catalog::new();
            if !json {
                println!("📚 book-catalog - {}\n", source.describe());
                // 読み込み中はスケルトンを表示
                print!("{}", render::render(&catalog.presentation()));
            }

            let spinner = (!json).then(loading_spinner);
            catalog.refresh(&source).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            if json {
                let out = serde_json::to_string_pretty(catalog.books())?;
                println!("{}", out);
            } else {
                let presentation = catalog.presentation();
                print!("{}", render::render(&presentation));
                if let Presentation::Cards(cards) = &presentation {
                    println!("\n✔ {}冊", cards.len());
                }
            }
        }

        Commands::Browse { input, idl } => {
            let source = book_catalog::resolve_source(&config, input.as_deref(), idl.as_deref())?;

            let mut catalog = Catalog::new();
            let spinner = loading_spinner();
            catalog.refresh(&source).await;
            spinner.finish_and_clear();

            browse::run_browse(&mut catalog)?;
        }

        Commands::Config { set_rpc_url, set_program_id, show } => {
            let mut config = config;

            if let Some(url) = set_rpc_url {
                config.set_rpc_url(url)?;
                println!("✔ RPC URLを設定しました");
            }

            if let Some(program_id) = set_program_id {
                config.set_program_id(program_id)?;
                println!("✔ プログラムIDを設定しました");
            }

            if show {
                let rpc = config.rpc_config();
                println!("設定:");
                println!("  RPC URL: {}", rpc.rpc_url);
                println!(
                    "  プログラムID: {}",
                    config.program_id.as_deref().unwrap_or("未設定")
                );
                println!(
                    "  IDL: {}",
                    config
                        .idl_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("書籍を読み込み中...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
