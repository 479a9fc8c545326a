//! Parse street lines given on the command line.
//!
//! ```sh
//! RUST_LOG=trace cargo run --example parse_street -- "201 E Randolph St" "123 1/2 BLUEMOUND RD"
//! ```

use street_address_rs::StreetParser;

fn main() {
    pretty_env_logger::init();

    let parser = StreetParser::new().with_collapse_whitespace(true);
    let lines: Vec<String> = std::env::args().skip(1).collect();

    if lines.is_empty() {
        eprintln!("usage: parse_street <street line>...");
        std::process::exit(1);
    }

    for line in &lines {
        match parser.try_parse(line) {
            Ok(street) => {
                println!("{line}");
                println!("  number:    {}", street.number);
                println!("  direction: {}", street.direction);
                println!("  name:      {}", street.name);
                println!("  suffix:    {}", street.suffix);
            }
            Err(e) => println!("{line}: {e}"),
        }
    }
}
