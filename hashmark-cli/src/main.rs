// Command-line interface for hashmark
//
// This binary renders hashmark source into plain text, HTML or MediaWiki markup, and offers an
// inspect command to look at the tokens and the document tree.
//
// Converting:
//
// The source is always hashmark. The target is picked, in order, by --to, by the extension of
// the -o file, or by convert.default_format in the configuration. With none of these the
// command fails: there is no implicit default format.
// Usage:
//  hashmark <input> [--to <format>] [-o <file>]           - Convert (default)
//  hashmark convert <input> [--to <format>] [-o <file>]   - Same as above (explicit)
//  hashmark inspect <input> [<transform>]                 - Execute a transform (defaults to "ast-treeviz")
//  hashmark --list-formats                                - List output formats
//  hashmark --list-transforms                             - List available transforms
//
// An input of "-" reads from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  hashmark notes.hm --to html --extra-standalone --extra-title "My notes"

use hashmark_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use hashmark_babel::formats::{HtmlFormat, PlainTextFormat};
use hashmark_babel::{FormatError, FormatRegistry, OutputFormat};
use hashmark_config::{HashmarkConfig, Loader};
use std::collections::HashMap;
use std::fs;
use std::io::Read;

/// Name of the configuration file picked up from the working directory
const LOCAL_CONFIG: &str = "hashmark.toml";

/// Consumer name of the inspect command's configuration-backed extras
const INSPECT_CONSUMER: &str = "inspect";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("hashmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render hashmark markup as plain text, HTML or MediaWiki")
        .long_about(
            "hashmark is a command-line tool for the hashmark markup: '#' headings, \
            '**bold**' spans and plain text.\n\n\
            Commands:\n  \
            - convert: Render a document (default command)\n  \
            - inspect: View internal representations (tokens, AST)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            hashmark notes.hm --to html                 # Render HTML to stdout\n  \
            hashmark notes.hm -o notes.wiki             # Format picked from the extension\n  \
            hashmark - --to plain < notes.hm            # Read from stdin\n  \
            hashmark inspect notes.hm token-simple      # View the token stream",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a hashmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of hashmark files")
                .long_about(
                    "View the internal structure of hashmark files at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - token-simple: One token per line\n  \
                    - token-json:   Tokens with byte ranges as JSON\n  \
                    - ast-tag:      AST as XML-like tags\n  \
                    - ast-treeviz:  AST as tree visualization (default)\n  \
                    - ast-json:     AST as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-spans         Show byte ranges in token-simple\n\n\
                    Examples:\n  \
                    hashmark inspect notes.hm                          # Tree visualization\n  \
                    hashmark inspect notes.hm token-simple --extra-spans",
                )
                .arg(input_arg("path"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'ast-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a hashmark document (default command)")
                .long_about(
                    "Render a hashmark document in another format.\n\n\
                    Formats:\n  \
                    - plain:    Normalized hashmark text, indented by nesting (.txt, .hm)\n  \
                    - html:     HTML fragment, or a full page with --extra-standalone (.html)\n  \
                    - wiki:     MediaWiki markup (.wiki)\n  \
                    - tag, treeviz: Tree dumps\n\n\
                    The target format comes from --to, else from the -o file extension,\n\
                    else from convert.default_format in the configuration.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    hashmark convert notes.hm --to wiki\n  \
                    hashmark convert notes.hm -o notes.html\n  \
                    hashmark notes.hm --to plain                # 'convert' is optional",
                )
                .arg(input_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: plain, html, wiki, tag, treeviz\n\
                            Aliases: text, txt, mediawiki",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args. If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            let first = cleaned_args.get(1).map(String::as_str);
            let looks_like_input = first.is_some_and(|arg| {
                (arg == "-" || !arg.starts_with('-'))
                    && !matches!(arg, "inspect" | "convert" | "help")
            });
            if looks_like_input {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .map_or("-", String::as_str);
            let transform = sub_matches
                .get_one::<String>("transform")
                .map_or(transforms::DEFAULT_TRANSFORM, String::as_str);
            apply_config_overrides(&mut config, &mut extra_params, INSPECT_CONSUMER);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .map_or("-", String::as_str);
            let to = sub_matches.get_one::<String>("to").map(String::as_str);
            let output = sub_matches.get_one::<String>("output").map(String::as_str);
            handle_convert_command(input, to, output, extra_params, config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Read the whole input, from stdin when the path is "-"
fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &HashmarkConfig,
) {
    let source = read_source(path);

    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    println!("{}", output.trim_end_matches('\n'));
}

/// Registry whose plain and html formats carry the configured options
fn configured_registry(config: &HashmarkConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(PlainTextFormat::new((&config.render.plain).into()));
    registry.register(HtmlFormat::new((&config.render.html).into()));
    registry
}

/// Pick the output format: explicit flag, then output extension, then configuration.
fn resolve_target(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &HashmarkConfig,
) -> Result<String, FormatError> {
    let requested = to
        .map(str::to_string)
        .or_else(|| output.and_then(|path| registry.detect_format_from_filename(path)))
        .or_else(|| config.convert.default_format.clone())
        .ok_or(FormatError::NoFormatSelected)?;

    if registry.has(&requested) {
        return Ok(requested);
    }
    // Aliases such as "text" or "mediawiki"
    requested
        .parse::<OutputFormat>()
        .map(|format| format.name().to_string())
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    mut extra_params: HashMap<String, String>,
    mut config: HashmarkConfig,
) {
    let target = resolve_target(&FormatRegistry::default(), to, output, &config)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            if e == FormatError::NoFormatSelected {
                eprintln!("Pass --to <format>, write to a file with a known extension, or set convert.default_format");
            }
            std::process::exit(1);
        });
    log::debug!("converting {input} to {target}");

    apply_config_overrides(&mut config, &mut extra_params, &target);
    let registry = configured_registry(&config);

    let source = read_source(input);

    let doc = registry.parse(&source, "plain").unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&doc, &target, &extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  token       - Tokenization");
    println!("  ast         - Document tree\n");

    println!("Formats:");
    println!("  simple      - One token per line (tokens only)");
    println!("  json        - JSON output (all stages)");
    println!("  tag         - XML-like tag format (AST only)");
    println!("  treeviz     - Tree visualization (AST only)\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Output formats:\n");
    let registry = FormatRegistry::default();
    for (name, description) in registry.describe_formats() {
        println!("  {name:<10} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> HashmarkConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Extras that shadow configuration keys, by the format or command that reads them
fn config_backed_keys(consumer: &str) -> &'static [&'static str] {
    match consumer {
        "plain" => &["indent-string"],
        "html" => &["standalone", "title"],
        INSPECT_CONSUMER => &["spans"],
        _ => &[],
    }
}

/// Move the extras that `consumer` reads from configuration into the configuration.
/// Whatever is left is passed on untouched, so the output format rejects what it cannot use.
fn apply_config_overrides(
    config: &mut HashmarkConfig,
    extra_params: &mut HashMap<String, String>,
    consumer: &str,
) {
    let keys = config_backed_keys(consumer);
    let mut take = |key: &str| {
        if keys.contains(&key) {
            extra_params.remove(key)
        } else {
            None
        }
    };

    if let Some(raw) = take("indent-string") {
        config.render.plain.indent_string = raw;
    }
    if let Some(raw) = take("standalone") {
        config.render.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(raw) = take("title") {
        config.render.html.title = raw;
    }
    if let Some(raw) = take("spans") {
        config.inspect.show_spans = parse_bool_arg("spans", &raw);
    }
}

fn build_inspect_params(
    config: &HashmarkConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert("spans".to_string(), config.inspect.show_spans.to_string());

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = args(&["hashmark", "inspect", "notes.hm"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, args);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "hashmark",
            "convert",
            "notes.hm",
            "--extra-title",
            "Notes",
            "--to",
            "html",
        ]));

        assert_eq!(
            cleaned,
            args(&["hashmark", "convert", "notes.hm", "--to", "html"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("title"), Some(&"Notes".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "hashmark",
            "notes.hm",
            "--extra-standalone",
            "--to",
            "html",
        ]));

        assert_eq!(cleaned, args(&["hashmark", "notes.hm", "--to", "html"]));
        assert_eq!(extra.get("standalone"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let (cleaned, extra) =
            parse_extra_args(&args(&["hashmark", "inspect", "notes.hm", "--extra-spans"]));

        assert_eq!(cleaned, args(&["hashmark", "inspect", "notes.hm"]));
        assert_eq!(extra.get("spans"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let (_, extra) = parse_extra_args(&args(&[
            "hashmark",
            "notes.hm",
            "--extras-indent-string",
            "..",
        ]));
        assert_eq!(extra.get("indent-string"), Some(&"..".to_string()));
    }

    fn defaults() -> HashmarkConfig {
        hashmark_config::load_defaults().unwrap()
    }

    fn all_extras() -> HashMap<String, String> {
        let mut extras = HashMap::new();
        extras.insert("indent-string".to_string(), "  ".to_string());
        extras.insert("standalone".to_string(), "yes".to_string());
        extras.insert("title".to_string(), "Notes".to_string());
        extras.insert("spans".to_string(), "true".to_string());
        extras
    }

    #[test]
    fn apply_config_overrides_for_html() {
        let mut config = defaults();
        let mut extras = all_extras();

        apply_config_overrides(&mut config, &mut extras, "html");

        assert!(config.render.html.standalone);
        assert_eq!(config.render.html.title, "Notes");
        assert_eq!(config.render.plain.indent_string, "\t");
        assert!(!config.inspect.show_spans);
        let mut left: Vec<_> = extras.keys().cloned().collect();
        left.sort();
        assert_eq!(left, vec!["indent-string", "spans"]);
    }

    #[test]
    fn apply_config_overrides_for_plain_and_inspect() {
        let mut config = defaults();
        let mut extras = all_extras();
        apply_config_overrides(&mut config, &mut extras, "plain");
        assert_eq!(config.render.plain.indent_string, "  ");
        assert!(!extras.contains_key("indent-string"));
        assert!(extras.contains_key("title"));

        let mut config = defaults();
        let mut extras = all_extras();
        apply_config_overrides(&mut config, &mut extras, INSPECT_CONSUMER);
        assert!(config.inspect.show_spans);
        assert_eq!(extras.len(), 3);
    }

    #[test]
    fn apply_config_overrides_leaves_everything_for_other_formats() {
        let mut config = defaults();
        let mut extras = all_extras();

        apply_config_overrides(&mut config, &mut extras, "wiki");

        assert_eq!(extras, all_extras());
        assert!(!config.render.html.standalone);
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys() {
        let mut config = defaults();
        let mut extras = HashMap::new();
        extras.insert("theme".to_string(), "dark".to_string());

        apply_config_overrides(&mut config, &mut extras, "html");

        assert_eq!(extras.get("theme"), Some(&"dark".to_string()));
    }

    #[test]
    fn inspect_params_include_configured_defaults() {
        let config = defaults();
        let mut overrides = HashMap::new();
        overrides.insert("custom".to_string(), "value".to_string());

        let params = build_inspect_params(&config, &overrides);
        assert_eq!(params.get("spans"), Some(&"false".to_string()));
        assert_eq!(params.get("custom"), Some(&"value".to_string()));
    }

    #[test]
    fn resolve_target_prefers_explicit_flag() {
        let config = defaults();
        let registry = configured_registry(&config);
        assert_eq!(
            resolve_target(&registry, Some("wiki"), Some("out.html"), &config),
            Ok("wiki".to_string())
        );
    }

    #[test]
    fn resolve_target_uses_output_extension() {
        let config = defaults();
        let registry = configured_registry(&config);
        assert_eq!(
            resolve_target(&registry, None, Some("out.htm"), &config),
            Ok("html".to_string())
        );
    }

    #[test]
    fn resolve_target_falls_back_to_config() {
        let mut config = defaults();
        config.convert.default_format = Some("mediawiki".to_string());
        let registry = configured_registry(&config);
        assert_eq!(
            resolve_target(&registry, None, Some("out.unknown"), &config),
            Ok("wiki".to_string())
        );
    }

    #[test]
    fn resolve_target_without_a_choice_is_an_error() {
        let config = defaults();
        let registry = configured_registry(&config);
        assert_eq!(
            resolve_target(&registry, None, None, &config),
            Err(FormatError::NoFormatSelected)
        );
    }

    #[test]
    fn resolve_target_rejects_unknown_names() {
        let config = defaults();
        let registry = configured_registry(&config);
        assert!(matches!(
            resolve_target(&registry, Some("pdf"), None, &config),
            Err(FormatError::FormatNotFound(_))
        ));
    }

    #[test]
    fn configured_registry_applies_render_settings() {
        let mut config = defaults();
        config.render.plain.indent_string = "..".to_string();
        let registry = configured_registry(&config);

        let doc = registry.parse("#A\nx", "plain").unwrap();
        assert_eq!(registry.serialize(&doc, "plain").unwrap(), "\n#A\n..x");
    }
}
