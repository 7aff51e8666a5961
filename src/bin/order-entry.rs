//! Terminal front end for the order form.
//!
//! Loads the catalog, walks through the form fields on stdin, shows the
//! running total and places the order. Logs go to stderr.

use clap::Parser;
use order_entry::prelude::*;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Command-line arguments for the order-entry terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the order-management backend
    #[arg(short, long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Automatic retries for the catalog fetch (0 = retry by hand only)
    #[arg(long, default_value_t = 0)]
    catalog_retries: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    use tracing_subscriber::{fmt, EnvFilter};
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let catalog_retry = match args.catalog_retries {
        0 => RetryPolicy::None,
        n => RetryPolicy::Custom(RetryConfig {
            max_retries: n,
            ..RetryConfig::idempotent()
        }),
    };
    let client = OrderEntryClient::builder()
        .base_url(&args.base_url)
        .timeout(Duration::from_secs(args.timeout_secs))
        .catalog_retry(catalog_retry)
        .build()?;
    tracing::info!("Using backend at {}", client.base_url());

    println!("Order Management System");
    println!("Place your order and track its progress\n");
    println!("{}", order_entry::form::render::PLACEHOLDER_LOADING);

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut form = OrderFormView::mount(client).await;

    loop {
        if !ensure_catalog(&mut form, &mut input).await? {
            break;
        }
        if !fill_draft(&mut form, &mut input).await? {
            break;
        }

        match prompt(&mut input, "Place order? [Y/n]").await? {
            None => break,
            Some(answer) if is_no(&answer) => {}
            Some(_) => {
                if let Some(note) = form.submit().await {
                    println!("\n{}", note);
                }
                if let Some(banner) = form.snapshot().banner {
                    println!("{}\n", banner);
                }
            }
        }

        match prompt(&mut input, "Another order? [y/N]").await? {
            Some(answer) if is_yes(&answer) => continue,
            _ => break,
        }
    }

    println!("\nOrder Management System v1.0");
    Ok(())
}

/// Keep offering a retry until the catalog loads. `false` means quit.
async fn ensure_catalog(
    form: &mut OrderFormView<OrderEntryClient>,
    input: &mut Input,
) -> std::io::Result<bool> {
    loop {
        let snap = form.snapshot();
        let Some(error) = snap.catalog_error else {
            return Ok(true);
        };
        println!("{}", error);
        match prompt(input, "Retry? [Y/n]").await? {
            Some(answer) if !is_no(&answer) => {
                println!("{}", order_entry::form::render::PLACEHOLDER_LOADING);
                form.retry_products().await;
            }
            _ => return Ok(false),
        }
    }
}

/// Prompt for every field. Blank input keeps the current value, so the
/// auto-filled product cost can be accepted with Enter. `false` on EOF.
async fn fill_draft(
    form: &mut OrderFormView<OrderEntryClient>,
    input: &mut Input,
) -> std::io::Result<bool> {
    for field in DraftField::ALL {
        if field == DraftField::Product {
            println!();
            for option in &form.snapshot().product_select.options {
                if option.is_placeholder() {
                    println!("  {}", option.label);
                } else {
                    println!("  [{}] {}", option.value, option.label);
                }
            }
        }

        let current = form.state().draft().get(field).to_string();
        let label = if current.is_empty() {
            field.label().to_string()
        } else {
            format!("{} [{}]", field.label(), current)
        };

        let Some(value) = prompt(input, &label).await? else {
            return Ok(false);
        };
        if !value.is_empty() {
            form.set_field(field, value);
        }

        if field == DraftField::ProductCost {
            if let Some(total) = form.snapshot().total {
                println!("Total Cost: ${}", total);
            }
        }
    }
    Ok(true)
}

async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    print!("{}: ", label);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

fn is_no(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "n" | "no")
}
