//! Log line formatter that stamps every event with the current display frame.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Latest running frame count reported by a view model
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Frame counts are shown as 16-bit hex
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// Formats events as `timestamp frame level spans target: fields`.
///
/// The frame is the counter last passed to [`set_frame_count`], printed as hex.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        write_dimmed(&mut writer, formatted_time)?;
        writer.write_char(' ')?;

        write_dimmed(&mut writer, format_args!("0x{:04X}", frame_count() & FRAME_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        write_colored_level(&mut writer, meta.level())?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut saw_any = false;
            for span in scope.from_root() {
                write_bold(&mut writer, span.metadata().name())?;
                saw_any = true;
                let ext = span.extensions();
                if let Some(fields) = &ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write_bold(&mut writer, "{")?;
                        write!(writer, "{}", fields)?;
                        write_bold(&mut writer, "}")?;
                    }
                }
                write_dimmed(&mut writer, ':')?;
            }
            if saw_any {
                writer.write_char(' ')?;
            }
        }

        write_dimmed(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn write_colored_level(writer: &mut Writer<'_>, level: &Level) -> fmt::Result {
    let (color, text) = match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    };

    if writer.has_ansi_escapes() {
        write!(writer, "{}{}\x1b[0m", color, text)
    } else {
        writer.write_str(text)
    }
}

fn write_dimmed(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[2m{}\x1b[0m", s)
    } else {
        write!(writer, "{}", s)
    }
}

fn write_bold(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[1m{}\x1b[0m", s)
    } else {
        write!(writer, "{}", s)
    }
}

/// Records the running frame count shown in log lines.
pub fn set_frame_count(frame: u64) {
    FRAME_COUNTER.store(frame, Ordering::Relaxed);
}

/// The frame count shown in log lines.
pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}
