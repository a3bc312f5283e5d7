use anyhow::Result;
use clap::Parser;
use exam_patterns::{cli::Cli, App};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // ログは標準エラーへ（標準出力の出力内容を変えない）
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("ロガーの初期化に失敗しました: {e}"))?;

    App::console().run();

    Ok(())
}
