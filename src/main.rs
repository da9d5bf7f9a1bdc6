// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, bail, Context};
use keyed_transformer::config::{
    config_path_from_env, load_and_validate_config, Config, ConfigFormat, ProcessorKind, ProcessorMap,
};
use keyed_transformer::observability::init_tracing;
use keyed_transformer::observability::messages::{config::DefaultConfigUsed, StructuredLog};
use keyed_transformer::payload::{Outcome, ProcessorRequest};
use keyed_transformer::traits::Processor;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.yaml|config.toml] <processor_id> [item ...]", program);
    eprintln!("Example: {} upper hello world", program);
    eprintln!("Example: {} average 1 2 3 4 5", program);
    eprintln!("Example: {} configs/text-transformers.yaml headline \"the lord of the rings\"", program);
    eprintln!("Without a config argument, ${} is used, then the built-in configuration.", keyed_transformer::config::consts::CONFIG_PATH_ENV);
}

/// A leading argument is a config path when it names an existing YAML/TOML file.
fn looks_like_config(arg: &str) -> bool {
    let path = Path::new(arg);
    ConfigFormat::from_path(path).is_some() && path.is_file()
}

fn resolve_config(config_arg: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match config_arg.or_else(config_path_from_env) {
        Some(path) => {
            let config = load_and_validate_config(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::builtin(), None)),
    }
}

/// Encode the command-line items as the JSON array the processor expects.
fn build_payload(kind: ProcessorKind, items: &[String]) -> anyhow::Result<Vec<u8>> {
    let payload = match kind {
        ProcessorKind::KeyedTransform => serde_json::to_vec(items)?,
        ProcessorKind::Average => {
            let numbers = items
                .iter()
                .map(|item| -> anyhow::Result<f64> {
                    let number = item
                        .parse::<f64>()
                        .with_context(|| format!("'{}' is not a number", item))?;
                    // JSON has no NaN or infinity.
                    if !number.is_finite() {
                        bail!("'{}' is not a finite number", item);
                    }
                    Ok(number)
                })
                .collect::<anyhow::Result<Vec<f64>>>()?;
            serde_json::to_vec(&numbers)?
        }
    };
    Ok(payload)
}

async fn run(args: Vec<String>) -> anyhow::Result<ExitCode> {
    let program = args.first().map(String::as_str).unwrap_or("keyed-transformer");
    let mut rest = &args[1.min(args.len())..];

    let config_arg = match rest.first() {
        Some(first) if looks_like_config(first) => {
            let path = PathBuf::from(first);
            rest = &rest[1..];
            Some(path)
        }
        _ => None,
    };

    let Some((processor_id, items)) = rest.split_first() else {
        print_usage(program);
        return Ok(ExitCode::from(2));
    };

    let (config, config_path) = resolve_config(config_arg)?;
    init_tracing(&config.logging.level);
    if config_path.is_none() {
        DefaultConfigUsed {
            processor_count: config.processors.len(),
        }
        .log();
    }

    let processor_config = config.processor(processor_id).ok_or_else(|| {
        let mut known: Vec<&str> = config.processors.iter().map(|p| p.id.as_str()).collect();
        known.sort();
        anyhow!("Unknown processor '{}'. Available: {}", processor_id, known.join(", "))
    })?;

    let processors = ProcessorMap::from_config(&config)?;
    let processor = processors
        .get(processor_id)
        .ok_or_else(|| anyhow!("Processor '{}' was not registered", processor_id))?;

    let payload = build_payload(processor_config.processor, items)?;
    let response = processor.process(ProcessorRequest::new(payload)).await;

    let metadata: BTreeMap<_, _> = response.metadata.iter().collect();
    match response.outcome {
        Some(Outcome::NextPayload(output)) => {
            println!("{}", String::from_utf8_lossy(&output));
            if !metadata.is_empty() {
                println!();
                for (key, value) in metadata {
                    println!("  {}: {}", key, value);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Outcome::Error(detail)) => {
            eprintln!("❌ Processor '{}' failed ({}): {}", processor_id, detail.code, detail.message);
            Ok(ExitCode::FAILURE)
        }
        None => bail!("Processor '{}' returned no outcome", processor_id),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(env::args().collect()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyed_transformer::config::consts::CONFIG_PATH_ENV;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Sets the config path variable for the lifetime of the guard.
    struct ConfigEnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
    }

    impl ConfigEnvGuard<'_> {
        fn set(value: Option<&str>) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            match value {
                Some(value) => env::set_var(CONFIG_PATH_ENV, value),
                None => env::remove_var(CONFIG_PATH_ENV),
            }
            Self { _lock: lock }
        }
    }

    impl Drop for ConfigEnvGuard<'_> {
        fn drop(&mut self) {
            env::remove_var(CONFIG_PATH_ENV);
        }
    }

    #[test]
    fn test_build_payload_strings() {
        let items = vec!["hello".to_string(), "world".to_string()];
        let payload = build_payload(ProcessorKind::KeyedTransform, &items).unwrap();
        assert_eq!(payload, br#"["hello","world"]"#.to_vec());
    }

    #[test]
    fn test_build_payload_numbers() {
        let items = vec!["1".to_string(), "2.5".to_string()];
        let payload = build_payload(ProcessorKind::Average, &items).unwrap();
        assert_eq!(payload, b"[1.0,2.5]".to_vec());
    }

    #[test]
    fn test_build_payload_rejects_non_numbers() {
        let items = vec!["one".to_string()];
        let error = build_payload(ProcessorKind::Average, &items).unwrap_err();
        assert!(error.to_string().contains("'one' is not a number"));
    }

    #[test]
    fn test_build_payload_rejects_non_finite_numbers() {
        for item in ["inf", "-inf", "NaN", "infinity"] {
            let items = vec!["1".to_string(), item.to_string()];
            let error = build_payload(ProcessorKind::Average, &items).unwrap_err();
            assert_eq!(error.to_string(), format!("'{}' is not a finite number", item));
        }
    }

    #[test]
    fn test_looks_like_config() {
        assert!(looks_like_config("configs/text-transformers.yaml"));
        assert!(!looks_like_config("missing.yaml"));
        assert!(!looks_like_config("upper"));
    }

    #[test]
    fn test_resolve_config_prefers_argument_over_env() {
        let _env = ConfigEnvGuard::set(Some("configs/missing.yaml"));
        let (config, path) =
            resolve_config(Some(PathBuf::from("configs/text-transformers.yaml"))).unwrap();
        assert_eq!(path, Some(PathBuf::from("configs/text-transformers.yaml")));
        assert!(config.processor("shout").is_some());
    }

    #[test]
    fn test_resolve_config_falls_back_to_env() {
        let _env = ConfigEnvGuard::set(Some("configs/text-transformers.toml"));
        let (config, path) = resolve_config(None).unwrap();
        assert_eq!(path, Some(PathBuf::from("configs/text-transformers.toml")));
        assert!(config.processor("headline").is_some());
    }

    #[test]
    fn test_resolve_config_env_path_errors_are_reported() {
        let _env = ConfigEnvGuard::set(Some("configs/missing.yaml"));
        let error = resolve_config(None).unwrap_err();
        assert!(format!("{:#}", error).starts_with("loading configs/missing.yaml"));
    }

    #[test]
    fn test_resolve_config_uses_builtin_without_argument_or_env() {
        for value in [None, Some("")] {
            let _env = ConfigEnvGuard::set(value);
            let (config, path) = resolve_config(None).unwrap();
            assert_eq!(path, None);
            assert_eq!(config, Config::builtin());
        }
    }
}
