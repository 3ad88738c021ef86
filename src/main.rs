use std::fs;
use std::path::PathBuf;

use clap::Parser;

use mdhtml::Config;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = Config::load(&cli.config);

    // Convert markdown to HTML
    let body = match mdhtml::convert(&markdown) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let html = if config.page.standalone {
        let title =
            mdhtml::extract_title(&markdown).unwrap_or_else(|| config.page.title.clone());
        render_page(&body, &title, &config.page.lang)
    } else {
        body
    };

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    // Write HTML
    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}

fn render_page(body: &str, title: &str, lang: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
