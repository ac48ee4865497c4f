//! Fetches a URL and prints the extracted page.
//!
//! Usage: `scrape_url [--markdown | --text] [--timeout SECS] [--skip TAG]... <URL>`
//!
//! Prints JSON by default. A page that cannot be loaded is logged as a
//! warning on stderr and printed as an empty result.

use rs_webscrape::markdown::{to_markdown, to_text};
use rs_webscrape::{scrape_with_options, FetchOptions, Options};
use std::env;
use std::error::Error;
use std::time::Duration;

enum Format {
    Json,
    Markdown,
    Text,
}

struct Args {
    url: String,
    format: Format,
    options: Options,
    fetch_options: FetchOptions,
}

fn usage() -> String {
    "usage: scrape_url [--markdown | --text] [--timeout SECS] [--skip TAG]... <URL>".to_string()
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut url = None;
    let mut format = Format::Json;
    let mut options = Options::default();
    let mut fetch_options = FetchOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--markdown" => format = Format::Markdown,
            "--text" => format = Format::Text,
            "--timeout" => {
                let secs: u64 = args.next().ok_or_else(usage)?.parse()?;
                fetch_options.timeout = Duration::from_secs(secs);
            }
            "--skip" => options.skip_tags.push(args.next().ok_or_else(usage)?),
            "-h" | "--help" => return Err(usage().into()),
            _ if url.is_none() => url = Some(arg),
            _ => return Err(format!("unexpected argument '{arg}'\n{}", usage()).into()),
        }
    }

    Ok(Args {
        url: url.ok_or_else(usage)?,
        format,
        options,
        fetch_options,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args()?;
    let page = scrape_with_options(&args.url, &args.options, &args.fetch_options);

    match args.format {
        Format::Json => println!("{}", page.to_json_pretty()?),
        Format::Markdown => println!("{}", to_markdown(&page)),
        Format::Text => println!("{}", to_text(&page.content)),
    }

    Ok(())
}
