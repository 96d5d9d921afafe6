use core::fmt::{self, Write as _};

use embedded_io_async::Write;
use heapless::String;
use log::info;

use crate::constants::{LINE_BUFFER_SIZE, LINE_TERMINATOR, STARTUP_BANNER};

#[derive(Debug)]
pub enum Error {
    Write,
    Overflow,
}

/// Line-oriented text output on top of any async byte sink (UART, USB CDC, ...).
///
/// Each line is staged in a fixed buffer and written in one go, followed by a
/// flush, so a reader never sees half a line from this side.
pub struct Console<W> {
    writer: W,
    lines_written: u32,
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write the startup banner. Meant to be called once, before any reading.
    pub async fn announce(&mut self) -> Result<(), Error> {
        self.write_line(format_args!("{}", STARTUP_BANNER)).await?;
        info!("Console ready");
        Ok(())
    }

    pub async fn write_line(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let mut line: String<LINE_BUFFER_SIZE> = String::new();
        line.write_fmt(args).map_err(|_| Error::Overflow)?;
        line.push_str(LINE_TERMINATOR).map_err(|_| Error::Overflow)?;

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|_| Error::Write)?;
        self.writer.flush().await.map_err(|_| Error::Write)?;

        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u32 {
        self.lines_written
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
