use anyhow::anyhow;
use flog::flog::*;
use flog::logger::*;
use flog::settings::*;
use flog::{log_debug, log_error, log_info, log_warning};
use std::thread::{self, JoinHandle};

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();

    // $ cargo run --bin flog_demo -- --settings=settings/dev.toml --path=/tmp/demo.log
    let cli = Cli::parse();
    let project_settings = parse_settings(cli.settings.as_deref())?;
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let path = cli.path.unwrap_or(project_settings.flog.path);
    let scope = project_settings.flog.lock_scope;
    let file_logger = LineLogger::with_scope(&path, scope)?;

    log_info!(file_logger, "This is an informational message")?;
    log_debug!(file_logger, "This is a debugging message")?;
    log_warning!(file_logger, "This is a warning message")?;
    log_error!(file_logger, "This is an error message")?;

    // Separate instances on the same file still produce whole lines.
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let path = path.clone();
            thread::spawn(move || -> Result<usize, FlogError> {
                let file_logger = LineLogger::with_scope(&path, scope)?;
                let mut total = 0;
                for n in 0..10 {
                    total += log_info!(file_logger, "worker {worker} record {n}")?;
                }
                Ok(total)
            })
        })
        .collect();

    let bytes = join_workers(handles)?;
    info!(%path, bytes, "demo records written");
    Ok(())
}

/// Waits for every worker and fails on the first write error or panic.
fn join_workers(handles: Vec<JoinHandle<Result<usize, FlogError>>>) -> anyhow::Result<usize> {
    let mut total = 0;
    for handle in handles {
        let bytes = handle.join().map_err(|_| anyhow!("worker panicked"))??;
        info!(bytes, "worker done");
        total += bytes;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_write_error_fails_the_join() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing").join("demo.log");
        let handles = vec![
            thread::spawn(|| Ok(12)),
            thread::spawn(move || -> Result<usize, FlogError> {
                let file_logger = LineLogger::new(&missing)?;
                log_info!(file_logger, "lost")
            }),
        ];

        let err = join_workers(handles).unwrap_err();

        assert!(err.downcast_ref::<FlogError>().is_some_and(FlogError::is_io));
    }

    #[test]
    fn worker_panic_fails_the_join() {
        let handles: Vec<JoinHandle<Result<usize, FlogError>>> =
            vec![thread::spawn(|| panic!("worker died"))];

        let err = join_workers(handles).unwrap_err();

        assert_eq!(err.to_string(), "worker panicked");
    }

    #[test]
    fn byte_counts_are_summed() {
        let handles = vec![thread::spawn(|| Ok(3)), thread::spawn(|| Ok(4))];

        assert_eq!(join_workers(handles).unwrap(), 7);
    }
}
