//! conflang command-line front end
//!
//! Reads a YAML document, translates it and writes the conflang text.

pub mod cli;
pub mod config;

use crate::cli::Cli;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use conflang_compiler::{Translator, TranslatorOptions};
use std::io::Write;
use std::path::Path;

/// Prefix of error messages written to standard error
pub const ERROR_PREFIX: &str = "Ошибка";

/// Build translator options from configuration and command-line overrides
pub fn translator_options(cli: &Cli, config: &CliConfig) -> TranslatorOptions {
    TranslatorOptions {
        max_depth: cli.max_depth.unwrap_or(config.max_depth),
    }
}

/// Translate the configured input and write the result
pub fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let translator = Translator::with_options(translator_options(cli, config));

    let text = match &cli.input {
        Some(path) => {
            tracing::debug!("translating {}", path.display());
            translator.translate_file(path)?
        }
        None => {
            let source = std::io::read_to_string(std::io::stdin())
                .context("не удалось прочитать стандартный ввод")?;
            translator.translate(&source)?
        }
    };

    write_output(cli.output.as_deref(), &text)
}

/// Write the translated document followed by a newline
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", text))
            .with_context(|| format!("не удалось записать файл {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text).context("не удалось записать в стандартный вывод")
        }
    }
}

/// Render an error the way the binary reports it
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{}: {}", ERROR_PREFIX, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn cli_for(input: PathBuf, output: PathBuf) -> Cli {
        Cli {
            input: Some(input),
            output: Some(output),
            config: None,
            max_depth: None,
        }
    }

    #[test]
    fn test_run_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.yaml");
        let output = dir.path().join("out.conf");
        std::fs::write(&input, "Server:\n  Port: 8080\n").unwrap();

        run(&cli_for(input, output.clone()), &CliConfig::default()).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "%{\nЭто структура Server\n%}\ndef Port := 8080\n");
    }

    #[test]
    fn test_run_reports_translation_error() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "Invalid:\n  123abc: \"value\"").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.conf");

        let err = run(&cli_for(input.path().to_path_buf(), output.clone()), &CliConfig::default())
            .unwrap_err();

        assert_eq!(format_error(&err), "Ошибка: Недопустимое имя: 123abc");
        assert!(!output.exists());
    }

    #[test]
    fn test_max_depth_override() {
        let config = CliConfig {
            max_depth: 4,
            ..CliConfig::default()
        };
        let mut cli = cli_for(PathBuf::from("in.yaml"), PathBuf::from("out.conf"));

        assert_eq!(translator_options(&cli, &config).max_depth, 4);
        cli.max_depth = Some(1);
        assert_eq!(translator_options(&cli, &config).max_depth, 1);
    }
}
