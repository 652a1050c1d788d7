//! iDraft command line front end
//!
//! # Usage
//!
//! ```bash
//! # HTML preview to stdout
//! idraft preview draft.txt > preview.html
//!
//! # Layout directives as JSON
//! idraft directives draft.txt
//!
//! # Render locally
//! idraft --font sans-serif --size 14 --spacing 2.0 render draft.txt --output project.pdf
//!
//! # Export through the backend, saves ./project.pdf
//! idraft export draft.txt --api-base http://localhost:5000
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use idraft::{
    export::ExportClient,
    types::{Editor, FontFamily, LineSpacing, TypographySettings},
};

#[derive(Parser)]
#[command(name = "idraft")]
#[command(about = "Draft plain text into a paginated PDF")]
struct Cli {
    /// Font family
    #[arg(long, value_enum, default_value_t = FontArg::Serif)]
    font: FontArg,

    /// Font size in points (8-72)
    #[arg(long, default_value_t = 12)]
    size: u8,

    /// Line spacing factor (1.0, 1.5 or 2.0)
    #[arg(long, default_value_t = 1.5)]
    spacing: f64,

    /// Italicize "et al." citations and reset typography to the defaults first
    #[arg(long)]
    auto_format: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FontArg {
    Serif,
    SansSerif,
}

impl From<FontArg> for FontFamily {
    fn from(font: FontArg) -> Self {
        match font {
            FontArg::Serif => FontFamily::Serif,
            FontArg::SansSerif => FontFamily::SansSerif,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the HTML preview
    Preview { input: PathBuf },

    /// Print the layout directives as JSON
    Directives { input: PathBuf },

    /// Render the PDF locally
    Render {
        input: PathBuf,

        #[arg(short, long, default_value = "project.pdf")]
        output: PathBuf,
    },

    /// Export the PDF through the backend
    Export {
        input: PathBuf,

        /// Backend base URL
        #[arg(long, default_value = "http://localhost:5000", env = "IDRAFT_API_BASE")]
        api_base: String,

        /// Directory receiving project.pdf
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Commands {
    fn input(&self) -> &Path {
        match self {
            Commands::Preview { input }
            | Commands::Directives { input }
            | Commands::Render { input, .. }
            | Commands::Export { input, .. } => input,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    idraft::init_tracing("warn");

    let cli = Cli::parse();

    // pasted text may not be valid UTF-8, the sanitizer drops whatever is lost here anyway
    let raw = std::fs::read(cli.command.input())?;
    let mut editor = Editor::new();
    editor.set_content(&String::from_utf8_lossy(&raw));

    if cli.auto_format {
        editor.auto_format();
    } else {
        editor.set_settings(TypographySettings::new(
            cli.font.into(),
            cli.size,
            LineSpacing::from_factor(cli.spacing),
        ));
    }

    match &cli.command {
        Commands::Preview { .. } => {
            print!("{}", editor.preview_html());
        }
        Commands::Directives { .. } => {
            println!("{}", serde_json::to_string_pretty(&editor.layout())?);
        }
        Commands::Render { output, .. } => {
            std::fs::write(output, editor.doc().render())?;
            println!("Wrote {}", output.display());
        }
        Commands::Export {
            api_base,
            output_dir,
            ..
        } => {
            let client = ExportClient::new(api_base.as_str());

            match editor.export(&client, output_dir).await {
                Ok(path) => println!("Saved {}", path.display()),
                Err(error) => anyhow::bail!("{}", error.notice()),
            }
        }
    }

    Ok(())
}
