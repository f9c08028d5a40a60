//! CLI demo that turns a JSON payment description into a pay-by-square token.
//!
//! Usage:
//!   pay-by-square <payment.json>
//!   pay-by-square < payment.json
//!
//! The JSON object takes the keyword arguments of `generate`; `date` and
//! `currency` may be omitted. Set `RUST_LOG=debug` to see per-stage metrics.

use pay_by_square::{generate, GenerateArgs};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [payment.json]", args[0]);
        eprintln!();
        eprintln!("Encode a payment into a pay-by-square token.");
        eprintln!("Reads the payment from stdin when no file is given.");
        process::exit(1);
    }

    // Read payment description
    let input_text = match args.get(1) {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading payment file '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut content = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut content) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            content
        }
    };

    let payment: GenerateArgs = match serde_json::from_str(&input_text) {
        Ok(payment) => payment,
        Err(e) => {
            eprintln!("Invalid payment description: {}", e);
            process::exit(1);
        }
    };

    match generate(payment) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("Encoding error: {}", e);
            process::exit(1);
        }
    }
}
