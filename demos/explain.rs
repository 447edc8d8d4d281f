//! Explain a path from the command line.
//!
//! Usage: `cargo run --example explain -- "M 10 10 L 20 20"`

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| {
        "M 10 10 C 20 20 40 20 50 10 A 25 25 -30 0 1 50 -25 Z".to_string()
    });

    match pathprose::explain_path(&input) {
        Ok(explanation) => {
            for item in &explanation.items {
                println!("{}", item.code_text());
                for paragraph in &item.prose {
                    println!("    {paragraph}");
                }
            }
        }
        Err(e) => eprintln!("{:?}", miette::Report::new(e)),
    }
}
