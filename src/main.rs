//! llvm-libcalls 命令行入口
//! 无参数运行：拉取 LLVM 主干的 RuntimeLibcalls.td，按行输出排序去重后的名称

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use llvm_libcalls::{
    DEFAULT_HTTP_TIMEOUT, DEFAULT_TD_URL, DocumentSource, Extractor, FileSource, HttpSource,
    LibcallResult, ScrapeConfig, run,
};

#[derive(Debug, Parser)]
#[command(name = "llvm-libcalls", version, about = "List the runtime library calls declared in LLVM's RuntimeLibcalls.td")]
struct Cli {
    /// Document URL
    #[arg(long, default_value = DEFAULT_TD_URL, conflicts_with = "input")]
    url: String,

    /// Read the document from a local file instead of the network
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Connect/read timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_HTTP_TIMEOUT)]
    timeout: u64,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn source(&self) -> LibcallResult<Box<dyn DocumentSource>> {
        if let Some(path) = &self.input {
            return Ok(Box::new(FileSource::new(path)));
        }
        let config = ScrapeConfig::builder()
            .url(self.url.as_str())
            .http_timeout(Duration::from_secs(self.timeout))
            .build()?;
        Ok(Box::new(HttpSource::new(&config)?))
    }
}

/// 默认日志级别：成功运行时 stderr 保持静默
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .finish()
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    log_subscriber(filter, io::stderr).init();
}

async fn execute<W: Write>(cli: &Cli, out: &mut W) -> LibcallResult<usize> {
    let source = cli.source()?;
    let extractor = Extractor::libcalls()?;
    run(source.as_ref(), &extractor, out).await
}

/// 结果 → 退出码；失败时向 err 写一行诊断信息
fn report_outcome<E: Write>(result: LibcallResult<usize>, err: &mut E) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_fetch_failure() => {
            let _ = writeln!(err, "ERROR fetching: {}", e.chain_message());
            ExitCode::from(1)
        }
        Err(e) => {
            let _ = writeln!(err, "ERROR: {}", e.chain_message());
            ExitCode::from(1)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    let result = execute(&cli, &mut out).await;
    report_outcome(result, &mut io::stderr().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use llvm_libcalls::LibcallError;
    use reqwest::StatusCode;

    /// 内存日志输出
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    async fn run_with_empty_input(verbose: bool) -> (ExitCode, Vec<u8>, Vec<u8>, String) {
        let path = std::env::temp_dir().join(format!(
            "llvm-libcalls-empty-{}-{}.td",
            std::process::id(),
            verbose
        ));
        tokio::fs::write(&path, b"").await.unwrap();

        let logs = CapturedLog::default();
        let _guard = tracing::subscriber::set_default(log_subscriber(
            EnvFilter::new(default_level(verbose)),
            logs.clone(),
        ));

        let cli = Cli::try_parse_from(["llvm-libcalls", "--input", path.to_str().unwrap()]).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report_outcome(execute(&cli, &mut out).await, &mut err);

        tokio::fs::remove_file(&path).await.unwrap();
        (code, out, err, logs.contents())
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["llvm-libcalls"]).unwrap();
        assert_eq!(cli.url, DEFAULT_TD_URL);
        assert_eq!(cli.timeout, 15);
        assert!(cli.input.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_input_conflicts_with_url() {
        let parsed = Cli::try_parse_from([
            "llvm-libcalls",
            "--url",
            "http://127.0.0.1/RuntimeLibcalls.td",
            "--input",
            "RuntimeLibcalls.td",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = Cli::try_parse_from(["llvm-libcalls", "--timeout", "0"]).unwrap();
        assert!(cli.source().is_err());
    }

    #[test]
    fn test_fetch_failure_exits_one_with_message() {
        let mut err = Vec::new();
        let code = report_outcome(
            Err(LibcallError::HttpStatus {
                url: "https://example.invalid/RuntimeLibcalls.td".to_string(),
                status: StatusCode::BAD_GATEWAY,
            }),
            &mut err,
        );
        assert_eq!(code, ExitCode::from(1));
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("ERROR fetching: "));
        assert!(err.contains("502"));
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn test_other_error_exits_one_with_generic_prefix() {
        let mut err = Vec::new();
        let code = report_outcome(Err(LibcallError::IoError(io::Error::other("broken pipe"))), &mut err);
        assert_eq!(code, ExitCode::from(1));
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("ERROR: "));
        assert!(!err.starts_with("ERROR fetching"));
    }

    #[test]
    fn test_success_exits_zero_silently() {
        let mut err = Vec::new();
        assert_eq!(report_outcome(Ok(0), &mut err), ExitCode::SUCCESS);
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_file_is_fetch_failure() {
        let cli = Cli::try_parse_from(["llvm-libcalls", "--input", "/nonexistent/llvm-libcalls/x.td"]).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report_outcome(execute(&cli, &mut out).await, &mut err);
        assert_eq!(code, ExitCode::from(1));
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("ERROR fetching: "));
    }

    #[tokio::test]
    async fn test_empty_input_is_silent_success() {
        let (code, out, err, logs) = run_with_empty_input(false).await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(logs, "");
    }

    #[tokio::test]
    async fn test_verbose_empty_input_logs_diagnostics() {
        let (code, out, err, logs) = run_with_empty_input(true).await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert!(logs.contains("is empty"));
    }
}
