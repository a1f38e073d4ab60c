use clap::Parser;
use gas_cycle_analyzer::{app, config, i18n};

/// 브레이튼 사이클 해석 CLI.
#[derive(Debug, Parser)]
#[command(name = "gas_cycle_analyzer_cli", version, about = "AD-HTC Gas Cycle Analyzer (CLI)")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: std::path::PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_from(&cli.config)?;
    let lang_code = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang_code, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &mut tr)?;
    Ok(())
}
