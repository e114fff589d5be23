//! Command-line argument definitions for the SimpleDraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`].

use clap::Parser;

/// Command-line arguments for the SimpleDraw compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input SimpleDraw file; the built-in example is used when omitted
    #[arg(help = "Path to the input file")]
    pub input: Option<String>,

    /// Base name for the exported artifacts
    #[arg(short, long, default_value = "output")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Skip the stage-by-stage listings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Path of the token listing artifact.
    pub fn tokens_path(&self) -> String {
        format!("{}_tokens.json", self.output)
    }

    /// Path of the intermediate code artifact.
    pub fn intermediate_path(&self) -> String {
        format!("{}_intermediate.json", self.output)
    }

    /// Path of the rendered image.
    pub fn svg_path(&self) -> String {
        format!("{}_output.svg", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["simpledraw"]);
        assert_eq!(args.input, None);
        assert_eq!(args.output, "output");
        assert_eq!(args.log_level, "info");
        assert!(!args.quiet);
    }

    #[test]
    fn test_artifact_paths() {
        let args = Args::parse_from(["simpledraw", "drawing.sd", "-o", "out/drawing", "-q"]);
        assert_eq!(args.input.as_deref(), Some("drawing.sd"));
        assert!(args.quiet);
        assert_eq!(args.tokens_path(), "out/drawing_tokens.json");
        assert_eq!(args.intermediate_path(), "out/drawing_intermediate.json");
        assert_eq!(args.svg_path(), "out/drawing_output.svg");
    }
}
