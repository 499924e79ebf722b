use flog::flog::LineLogger;
use flog::logger::*;
use flog::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    debug!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let path = cli.path.unwrap_or(project_settings.flog.path);
    let level = cli.level.unwrap_or(project_settings.flog.level);
    let message = cli.message.join(" ");

    let file_logger =
        LineLogger::with_scope(&path, project_settings.flog.lock_scope)?.with_level(level);
    let written = file_logger.log(format_args!("{message}"))?;
    info!(%path, %level, written, "record appended");
    println!("{written}");

    Ok(())
}
