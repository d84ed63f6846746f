//! pagespeak - print what the narration engine would read aloud

use std::process::ExitCode;

use clap::Parser;

use pagespeak::{
    ChromeMarkers, Error, describe_with_type, extract_all, extract_from, parse_html_with_encoding,
};

#[derive(Parser)]
#[command(name = "pagespeak")]
#[command(version, about = "Print the narratable content of an HTML page", long_about = None)]
#[command(after_help = "EXAMPLES:
    pagespeak page.html                  Print the page's readable content
    pagespeak --from intro page.html     Print content from element #intro onward
    pagespeak --describe cta page.html   Print the spoken label of element #cta")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Start extraction at the element with this id
    #[arg(long, value_name = "ID", conflicts_with = "describe")]
    from: Option<String>,

    /// Print the point-read description of the element with this id
    #[arg(long, value_name = "ID")]
    describe: Option<String>,

    /// Character encoding to try when the input is not valid UTF-8
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let bytes = std::fs::read(&cli.input)?;
    let dom = parse_html_with_encoding(&bytes, cli.encoding.as_deref());
    let chrome = ChromeMarkers::default();

    let (kind, text) = if let Some(id) = &cli.describe {
        let node = dom
            .get_by_id(id)
            .ok_or_else(|| Error::UnknownElement(id.clone()))?;
        ("description", describe_with_type(&dom, node))
    } else if let Some(id) = &cli.from {
        let node = dom
            .get_by_id(id)
            .ok_or_else(|| Error::UnknownElement(id.clone()))?;
        ("content", extract_from(&dom, &chrome, node))
    } else {
        ("content", extract_all(&dom, &chrome))
    };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "input": cli.input,
                "kind": kind,
                "chars": text.chars().count(),
                "text": text,
            })
        );
    } else {
        println!("{text}");
    }

    Ok(())
}
