//! secure-keys - 봉인 값 생성 및 서명 지문 확인 도구

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use secure_keys_lib::secrets::SecretCatalog;
use secure_keys_lib::tooling::{check_vault, fingerprint_file, seal_input, ToolError};
use secure_keys_lib::{SecretName, VaultConfig};

#[derive(Parser)]
#[command(name = "secure-keys")]
#[command(about = "Seal AdMob keys and inspect signing fingerprints", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 인증서 파일의 서명 지문 출력 (첫 번째 인증서)
    Fingerprint { certificate: PathBuf },

    /// stdin의 평문을 봉인 값으로 변환
    Seal {
        #[arg(value_parser = parse_secret_name)]
        name: SecretName,
    },

    /// 환경 설정으로 Vault를 구성해 검증 (값은 출력하지 않음)
    Check,
}

fn parse_secret_name(value: &str) -> Result<SecretName, String> {
    value.parse().map_err(|unknown| {
        let known: Vec<&str> = SecretName::ALL.iter().map(|n| n.as_str()).collect();
        format!("unknown secret '{}' (expected one of: {})", unknown, known.join(", "))
    })
}

fn run(command: Command) -> Result<(), ToolError> {
    match command {
        Command::Fingerprint { certificate } => {
            println!("{}", fingerprint_file(&certificate)?);
            Ok(())
        }
        Command::Seal { name } => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            println!("{}", seal_input(&SecretCatalog::embedded(), name, &input)?);
            Ok(())
        }
        Command::Check => {
            let vault = VaultConfig::from_env()?.build_vault()?;
            let report = check_vault(&vault);
            for line in &report.lines {
                println!("{}", line);
            }
            Ok(report.outcome?)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
