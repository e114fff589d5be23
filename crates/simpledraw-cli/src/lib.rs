//! CLI logic for the SimpleDraw compiler.
//!
//! Reads a SimpleDraw program (or the built-in example), prints each
//! compilation stage and writes the token, intermediate code and SVG
//! artifacts.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::{error, info};

use simpledraw::{Compilation, Compiler, SimpleDrawError};

/// Program compiled when no input file is given.
pub const EXAMPLE_PROGRAM: &str = "# Triángulo
Paper 100
Pen 3
Line 50 10 10 90
Line 10 90 90 90
Line 90 90 50 10
";

/// Run the SimpleDraw CLI application
///
/// A missing input file is logged and ends the run without compiling
/// anything; it is not treated as a failure.
///
/// # Errors
///
/// Returns `SimpleDrawError` for:
/// - Configuration loading errors
/// - Other file I/O errors
/// - Syntax errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), SimpleDrawError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let source = match &args.input {
        Some(path) => {
            info!(input_path = path; "Reading source file");
            match fs::read_to_string(path) {
                Ok(source) => source,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    error!(input_path = path; "File not found");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
        None => {
            info!("No input file given, using the built-in example");
            EXAMPLE_PROGRAM.to_string()
        }
    };

    if !args.quiet {
        print_source(&source);
    }

    let compiler = Compiler::new(app_config);
    let compilation = compiler.compile(&source)?;

    if !args.quiet {
        println!("{}", compilation.report());
    }

    export(&compiler, &compilation, args)?;
    print_summary(&compilation, args);

    Ok(())
}

/// Write the token listing, the intermediate code and the image.
fn export(
    compiler: &Compiler,
    compilation: &Compilation<'_>,
    args: &Args,
) -> Result<(), SimpleDrawError> {
    let tokens_path = args.tokens_path();
    fs::write(&tokens_path, compiler.tokens_json(compilation)?)?;
    info!(output_file = tokens_path; "Tokens exported");

    let intermediate_path = args.intermediate_path();
    fs::write(&intermediate_path, compiler.instructions_json(compilation)?)?;
    info!(output_file = intermediate_path; "Intermediate code exported");

    let svg_path = args.svg_path();
    fs::write(&svg_path, compiler.render_svg(compilation)?)?;
    info!(output_file = svg_path; "SVG exported successfully");

    Ok(())
}

fn print_source(source: &str) {
    let rule = "-".repeat(70);
    println!("{rule}");
    println!("SOURCE:");
    println!("{rule}");
    println!("{}", source.trim_end());
    println!("{rule}");
}

fn print_summary(compilation: &Compilation<'_>, args: &Args) {
    println!("Files exported: {}_*", args.output);
    println!("Tokens: {}", compilation.tokens().len());
    println!("Symbols: {}", compilation.symbols().len());
    println!("Instructions: {}", compilation.code().len());
    if compilation.removed() > 0 {
        println!(
            "Optimization: {} instruction(s) removed",
            compilation.removed()
        );
    }
}
