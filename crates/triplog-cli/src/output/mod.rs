mod error_text;
mod export_text;
mod format;
mod json;
mod mode;
mod summary_text;
mod trip_text;

use std::io::{self, Write};

use triplog_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "trip add" => trip_text::render_trip_add(&success.data),
        "trip list" => trip_text::render_trip_list(&success.data),
        "trip clear" => trip_text::render_trip_clear(&success.data),
        "summary" => summary_text::render_summary(&success.data),
        "export" => export_text::render_export(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

/// Writes tolerate a closed pipe so `triplog ... | head` exits cleanly.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_ignoring_broken_pipe(&mut stdout, text.as_bytes())?;
    flush_ignoring_broken_pipe(&mut stdout)
}

fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_ignoring_broken_pipe(&mut stdout, text.as_bytes())?;
    write_ignoring_broken_pipe(&mut stdout, b"\n")?;
    flush_ignoring_broken_pipe(&mut stdout)
}

fn write_ignoring_broken_pipe(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    match writer.write_all(bytes) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(error),
    }
}

fn flush_ignoring_broken_pipe(writer: &mut dyn Write) -> io::Result<()> {
    match writer.flush() {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(error),
    }
}
