use crate::config::FunctionSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "greeting-sink")]
#[command(about = "Run the greeting endpoint and the event batch sink locally")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve one greeting request
    Greet(GreetArgs),
    /// Feed a batch of messages through the sink
    Ingest(IngestArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GreetArgs {
    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long, help = "Value of the `name` query parameter")]
    pub name: Option<String>,

    #[arg(long, help = "Request body")]
    pub body: Option<String>,

    #[arg(long, help = "Override the greeting template, e.g. \"Hi {name}\"")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct IngestArgs {
    #[arg(long, help = "File holding the batch payload")]
    pub input: PathBuf,

    #[arg(long, default_value = "json", help = "Payload format: json or lines")]
    pub format: String,

    #[arg(long, help = "Directory blobs are written under")]
    pub output: Option<String>,

    #[arg(long, help = "Blob key template, e.g. eventhub-output/{rand-guid}.txt")]
    pub blob_path: Option<String>,

    #[arg(long, help = "Only log messages, do not write blobs")]
    pub no_blobs: bool,
}

impl CliConfig {
    /// 讀設定檔、套用命令列覆蓋，最後才驗證
    pub fn load_settings(&self) -> Result<FunctionSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from {}", path.display());
                FunctionSettings::from_file(path)?
            }
            None => FunctionSettings::default(),
        };

        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, settings: &mut FunctionSettings) {
        match &self.command {
            Command::Greet(args) => {
                if let Some(template) = &args.template {
                    settings.greeting.template = Some(template.clone());
                }
            }
            Command::Ingest(args) => {
                if let Some(output) = &args.output {
                    settings.sink.output_path = output.clone();
                }
                if let Some(blob_path) = &args.blob_path {
                    settings.sink.blob_path = blob_path.clone();
                }
                if args.no_blobs {
                    settings.sink.write_blobs = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greet() {
        let cli = CliConfig::parse_from(["greeting-sink", "greet", "--name", "Ada", "--verbose"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Greet(args) => {
                assert_eq!(args.method, "GET");
                assert_eq!(args.name.as_deref(), Some("Ada"));
                assert!(args.body.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_ingest_overrides_settings() {
        let cli = CliConfig::parse_from([
            "greeting-sink",
            "ingest",
            "--input",
            "batch.json",
            "--output",
            "/tmp/out",
            "--no-blobs",
        ]);
        let mut settings = FunctionSettings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.sink.output_path, "/tmp/out");
        assert!(!settings.sink.write_blobs);
        assert_eq!(settings.sink.blob_path, "eventhub-output/{rand-guid}.txt");
    }

    #[test]
    fn test_flag_replaces_invalid_file_value() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("functions.toml");
        std::fs::write(&path, "[sink]\nblob_path = \"fixed.txt\"\n").unwrap();
        let config = path.to_str().unwrap();

        let cli = CliConfig::parse_from([
            "greeting-sink",
            "--config",
            config,
            "ingest",
            "--input",
            "batch.json",
            "--blob-path",
            "x/{rand-guid}.txt",
        ]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.sink.blob_path, "x/{rand-guid}.txt");

        // 沒有覆蓋時，檔案裡的值仍然要被擋下
        let cli = CliConfig::parse_from([
            "greeting-sink",
            "--config",
            config,
            "ingest",
            "--input",
            "batch.json",
        ]);
        assert!(cli.load_settings().is_err());
    }
}
