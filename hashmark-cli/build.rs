use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-simple",
    "token-json",
    "ast-tag",
    "ast-treeviz",
    "ast-json",
];

const FORMATS: &[&str] = &["plain", "html", "wiki", "tag", "treeviz"];

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("hashmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render hashmark markup as plain text, HTML or MediaWiki")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a hashmark.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of hashmark files")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a hashmark document (default command)")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "hashmark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "hashmark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "hashmark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
