use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use flate2::write::GzEncoder;
use log::{Level, LevelFilter, Log, Metadata, Record};
use potato_blocker_config::LoggingConfig;
use simplelog::{SharedLogger, SimpleLogger, WriteLogger};

pub const LATEST_LOG: &str = "latest.log";

static PLUGIN_LOGGER: OnceLock<PluginLogger> = OnceLock::new();

/// Console logger plus a file logger attached once the logger has been
/// installed, so `latest.log` is only rotated by the process that owns it.
struct PluginLogger {
    console: Box<dyn SharedLogger>,
    file: OnceLock<Box<dyn SharedLogger>>,
}

impl Log for PluginLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
            || self.file.get().is_some_and(|file| file.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        self.console.log(record);
        if let Some(file) = self.file.get() {
            file.log(record);
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = self.file.get() {
            file.flush();
        }
    }
}

/// Installs the plugin's logger: console output plus, if configured,
/// `<data_folder>/logs/latest.log`. The previous `latest.log` is gzipped first.
///
/// Returns `false` when logging is disabled or a logger is already installed in
/// this process, in which case records go wherever that logger sends them and
/// the log directory is left untouched.
pub fn init_logger(config: &LoggingConfig, data_folder: &Path) -> bool {
    if !config.enabled {
        return false;
    }

    let level = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(LevelFilter::from_str)
        .and_then(Result::ok)
        .unwrap_or(LevelFilter::Info);
    let log_config = build_config(config);

    let logger = PLUGIN_LOGGER.get_or_init(|| PluginLogger {
        console: SimpleLogger::new(level, log_config.clone()),
        file: OnceLock::new(),
    });
    if log::set_logger(logger).is_err() {
        return false;
    }
    log::set_max_level(level);

    if config.file {
        match open_log_file(&data_folder.join("logs")) {
            Ok(file) => {
                let _ = logger.file.set(WriteLogger::new(level, log_config, file));
            }
            Err(e) => eprintln!("Failed to open plugin log file: {e}"),
        }
    }

    true
}

fn build_config(config: &LoggingConfig) -> simplelog::Config {
    let mut builder = simplelog::ConfigBuilder::new();

    if config.timestamp {
        builder.set_time_format_custom(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));
        builder.set_time_level(LevelFilter::Trace);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }

    if !config.color {
        for level in Level::iter() {
            builder.set_level_color(level, None);
        }
    }

    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    builder.build()
}

fn open_log_file(logs_dir: &Path) -> io::Result<File> {
    std::fs::create_dir_all(logs_dir)?;
    archive_latest_log(logs_dir)?;
    File::create(logs_dir.join(LATEST_LOG))
}

/// Compresses an existing `latest.log` in `logs_dir` into a dated archive.
/// Returns the archive path, or `None` when there was nothing to archive.
pub fn archive_latest_log(logs_dir: &Path) -> io::Result<Option<PathBuf>> {
    let latest = logs_dir.join(LATEST_LOG);
    if !latest.exists() {
        return Ok(None);
    }

    let archive = archive_filename(logs_dir);
    let mut file = File::open(&latest)?;
    let mut encoder = GzEncoder::new(
        BufWriter::new(File::create(&archive)?),
        flate2::Compression::best(),
    );
    io::copy(&mut file, &mut encoder)?;
    encoder.finish()?;
    Ok(Some(archive))
}

/// First free `YYYY-MM-DD-N.log.gz` name in `logs_dir` for today's date.
pub fn archive_filename(logs_dir: &Path) -> PathBuf {
    let now = time::OffsetDateTime::now_utc()
        .to_offset(time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC));
    let base_filename = format!("{}-{:02}-{:02}", now.year(), now.month() as u8, now.day());

    let mut id = 1;
    loop {
        let filename = logs_dir.join(format!("{base_filename}-{id}.log.gz"));
        if !filename.exists() {
            return filename;
        }
        id += 1;
    }
}
