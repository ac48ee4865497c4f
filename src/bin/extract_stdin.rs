//! Reads HTML from stdin and writes the extracted page as JSON to stdout.
//!
//! Usage: `extract_stdin [--pretty] < page.html`

use rs_webscrape::extract_page_bytes;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let pretty = std::env::args().skip(1).any(|arg| arg == "--pretty");

    // Read raw bytes so the charset declared by the page is honoured
    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }

    let page = extract_page_bytes(&html);

    let json = if pretty {
        page.to_json_pretty()
    } else {
        page.to_json()
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialise result: {e}");
            std::process::exit(1);
        }
    }
}
