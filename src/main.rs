//! Text masking CLI application.
//!
//! This binary provides a command-line interface for the textmask library,
//! masking values given as arguments or streamed line by line through
//! files and standard streams.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use textmask::{MaskOptions, MaskSpec, Masker, NumberOptions, TokenSet};

/// Text Masking Tool
///
/// Apply a mask pattern to values, recover the unmasked characters, or
/// check completion. Values come from arguments, a file, or stdin.
#[derive(Parser)]
#[command(name = "textmask")]
#[command(version, long_about = None)]
struct Cli {
    /// Mask pattern (repeat to supply candidate patterns)
    #[arg(short, long, value_name = "PATTERN")]
    mask: Vec<String>,

    /// Custom tokens as SYMBOL:PATTERN[:FLAG] entries joined by '|'
    #[arg(short, long, value_name = "SPEC")]
    tokens: Option<String>,

    /// Replace the built-in tokens instead of merging with them
    #[arg(long, requires = "tokens")]
    tokens_replace: bool,

    /// Insert upcoming mask literals before they are typed
    #[arg(short, long)]
    eager: bool,

    /// Scan values from the end (right-anchored masks)
    #[arg(short, long)]
    reversed: bool,

    /// Format values as numbers instead of applying a mask
    #[arg(long)]
    number: bool,

    /// Locale tag for number grouping and decimal separators
    #[arg(long, value_name = "TAG")]
    number_locale: Option<String>,

    /// Maximum fraction digits in number mode
    #[arg(long, value_name = "N")]
    number_fraction: Option<usize>,

    /// Drop the minus sign in number mode
    #[arg(long)]
    number_unsigned: bool,

    /// Print unmasked values instead of masked ones
    #[arg(short, long)]
    unmasked: bool,

    /// Print whether each value completes the mask
    #[arg(short, long, conflicts_with = "unmasked")]
    completed: bool,

    /// Read values line by line from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write results to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Values to process (stdin is read when empty and no --input)
    #[arg(value_name = "VALUE")]
    values: Vec<String>,
}

/// Which view of each value gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Masked,
    Unmasked,
    Completed,
}

/// Masking command handler owning the configured engine.
struct MaskHandler {
    masker: Masker,
    verbose: bool,
}

impl MaskHandler {
    fn new(options: MaskOptions, verbose: bool) -> Result<Self> {
        let masker = Masker::new(options).context("Invalid mask configuration")?;
        Ok(Self { masker, verbose })
    }

    /// Renders one value in the requested view.
    fn render(&self, value: &str, view: View) -> String {
        match view {
            View::Masked => self.masker.masked(value),
            View::Unmasked => self.masker.unmasked(value),
            View::Completed => self.masker.completed(value).to_string(),
        }
    }

    /// Processes all values and writes results to the chosen sink.
    fn run(&self, values: &[String], view: View, output: Option<&PathBuf>) -> Result<()> {
        let results: Vec<String> = values.iter().map(|value| self.render(value, view)).collect();

        let mut rendered = results.join("\n");
        if !rendered.is_empty() {
            rendered.push('\n');
        }

        match output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!(
                    "✓ Processed {} value(s) → {}",
                    values.len(),
                    path.display()
                );
            }
            None => print!("{}", rendered),
        }

        if values.is_empty() {
            eprintln!("⚠ No values supplied");
        } else if self.verbose {
            let completed = values
                .iter()
                .filter(|value| self.masker.completed(value))
                .count();
            eprintln!("\nMasking Summary:");
            eprintln!("  Values processed: {}", values.len());
            eprintln!("  Completed: {} of {}", completed, values.len());
        }

        Ok(())
    }
}

/// Builds masker options from command-line arguments.
fn build_options(cli: &Cli) -> Result<MaskOptions> {
    let number_requested = cli.number
        || cli.number_locale.is_some()
        || cli.number_fraction.is_some()
        || cli.number_unsigned;

    if cli.mask.is_empty() && !number_requested {
        anyhow::bail!("No mask configured. Use --mask or one of the --number options.");
    }

    let mask = match cli.mask.len() {
        0 => None,
        1 => Some(MaskSpec::Pattern(cli.mask[0].clone())),
        _ => Some(MaskSpec::Sequence(cli.mask.clone())),
    };

    let tokens = match &cli.tokens {
        Some(spec) => Some(TokenSet::parse(spec)?),
        None => None,
    };

    let number = if number_requested {
        let mut options = NumberOptions::new();
        if let Some(locale) = &cli.number_locale {
            options.locale = locale.clone();
        }
        if let Some(fraction) = cli.number_fraction {
            options.fraction = fraction;
        }
        options.unsigned = cli.number_unsigned;
        Some(options)
    } else {
        None
    };

    Ok(MaskOptions {
        mask,
        tokens,
        tokens_replace: cli.tokens_replace,
        eager: cli.eager,
        reversed: cli.reversed,
        number,
    })
}

/// Collects values from arguments, a file, or stdin, in that order.
fn collect_values(cli: &Cli) -> Result<Vec<String>> {
    if !cli.values.is_empty() {
        return Ok(cli.values.clone());
    }

    if let Some(path) = &cli.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(text.lines().map(str::to_string).collect());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer.lines().map(str::to_string).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let view = if cli.completed {
        View::Completed
    } else if cli.unmasked {
        View::Unmasked
    } else {
        View::Masked
    };

    let options = build_options(&cli)?;
    let handler = MaskHandler::new(options, cli.verbose)?;
    let values = collect_values(&cli)?;

    if cli.verbose {
        if cli.mask.is_empty() {
            eprintln!("Mask:   number mode");
        } else {
            eprintln!("Mask:   {}", cli.mask.join(", "));
        }
        eprintln!("View:   {:?}", view);
        eprintln!("Values: {}", values.len());
    }

    handler.run(&values, view, cli.output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with_masks(masks: &[&str]) -> Cli {
        Cli {
            mask: masks.iter().map(|m| m.to_string()).collect(),
            tokens: None,
            tokens_replace: false,
            eager: false,
            reversed: false,
            number: false,
            number_locale: None,
            number_fraction: None,
            number_unsigned: false,
            unmasked: false,
            completed: false,
            input: None,
            output: None,
            verbose: false,
            values: Vec::new(),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_mask_and_no_number_rejected() {
        let cli = cli_with_masks(&[]);
        assert!(build_options(&cli).is_err());
    }

    #[test]
    fn test_single_mask_becomes_pattern() {
        let cli = cli_with_masks(&["#-#"]);
        let options = build_options(&cli).unwrap();
        assert!(matches!(options.mask, Some(MaskSpec::Pattern(_))));
    }

    #[test]
    fn test_repeated_masks_become_sequence() {
        let cli = cli_with_masks(&["#-#", "#-#-#"]);
        let options = build_options(&cli).unwrap();
        assert!(matches!(options.mask, Some(MaskSpec::Sequence(ref v)) if v.len() == 2));
    }

    #[test]
    fn test_any_number_flag_activates_number_mode() {
        let mut cli = cli_with_masks(&[]);
        cli.number_fraction = Some(2);
        let options = build_options(&cli).unwrap();
        let number = options.number.unwrap();
        assert_eq!(number.fraction, 2);
        assert_eq!(number.locale, "en");
    }

    #[test]
    fn test_bad_token_spec_rejected() {
        let mut cli = cli_with_masks(&["#"]);
        cli.tokens = Some("no-pattern".to_string());
        assert!(build_options(&cli).is_err());
    }
}
