use anyhow::Context;
use clap::Parser;
use helper_kit::config::{Command, LogFormat};
use helper_kit::utils::{logger, validation::Validate};
use helper_kit::{
    check_file_name, resolver_for, CliConfig, Helper, HelperConfig, PathPlatform, PathResolver,
    VERSION_PARSE_ERROR,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
enum Report {
    Filename {
        name: String,
        valid: bool,
        reason: Option<String>,
    },
    Version {
        v1: String,
        v2: String,
        result: i32,
    },
    Contains {
        parent: String,
        child: String,
        platform: PathPlatform,
        resolved_parent: String,
        resolved_child: String,
        contained: bool,
    },
}

impl Report {
    /// Plain one-line rendering used without `--json`.
    fn line(&self) -> String {
        match self {
            Report::Filename { valid: true, .. } => "valid".to_string(),
            Report::Filename { reason, .. } => {
                format!("invalid: {}", reason.as_deref().unwrap_or("unknown"))
            }
            Report::Version { result, .. } => result.to_string(),
            Report::Contains { contained, .. } => contained.to_string(),
        }
    }

    fn succeeded(&self) -> bool {
        match self {
            Report::Filename { valid, .. } => *valid,
            Report::Version { result, .. } => *result != VERSION_PARSE_ERROR,
            Report::Contains { contained, .. } => *contained,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => HelperConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => HelperConfig::default(),
    };

    let verbose = cli.verbose || config.verbose();
    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(verbose),
        LogFormat::Compact => logger::init_cli_logger(verbose),
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e).context("Invalid configuration");
    }
    tracing::debug!("CLI config: {:?}", cli);

    let report = run(&cli.command, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.line());
    }

    if !report.succeeded() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: &Command, config: &HelperConfig) -> anyhow::Result<Report> {
    // Command-line overrides win over the config file.
    let (rules, cwd) = match command {
        Command::Contains {
            platform: Some(arg),
            cwd,
            ..
        } => (arg.rules(), cwd.as_deref().or(config.cwd())),
        Command::Contains { cwd, .. } => (config.platform()?, cwd.as_deref().or(config.cwd())),
        _ => (config.platform()?, config.cwd()),
    };
    let helper = Helper::new(resolver_for(rules, cwd));

    let report = match command {
        Command::Filename { name } => Report::Filename {
            name: name.clone(),
            valid: helper.valid_file_name(name).await,
            reason: check_file_name(name).err().map(|v| v.to_string()),
        },
        Command::Version { v1, v2 } => Report::Version {
            v1: v1.clone(),
            v2: v2.clone(),
            result: helper.version_compare(v1, v2).await,
        },
        Command::Contains { parent, child, .. } => {
            let resolver = helper.resolver();
            Report::Contains {
                parent: parent.clone(),
                child: child.clone(),
                platform: resolver.platform(),
                resolved_parent: resolver.resolve(parent).to_string(),
                resolved_child: resolver.resolve(child).to_string(),
                contained: helper.is_subdirectory_or_equal(parent, child),
            }
        }
    };

    Ok(report)
}
