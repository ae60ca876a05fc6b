use std::io::Write;

use replay_core::Frame;
use replay_engine::PageSurface;
use replay_logging::replay_warn;

/// Renders the page as plain terminal lines.
pub struct TerminalSurface<W: Write> {
    out: W,
    typing_line_open: bool,
    share_link: Option<String>,
    navigated_to: Option<String>,
    focus_requested: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            typing_line_open: false,
            share_link: None,
            navigated_to: None,
            focus_requested: false,
        }
    }

    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    pub fn navigated_to(&self) -> Option<&str> {
        self.navigated_to.as_deref()
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        self.close_typing_line();
        if let Err(err) = writeln!(self.out, "{text}") {
            replay_warn!("Failed to write to terminal: {}", err);
        }
    }

    fn close_typing_line(&mut self) {
        if std::mem::take(&mut self.typing_line_open) {
            let _ = writeln!(self.out);
        }
    }
}

impl<W: Write> PageSurface for TerminalSurface<W> {
    fn render(&mut self, frame: &Frame) {
        match frame {
            Frame::Typed { text } => {
                self.typing_line_open = true;
                let result = write!(self.out, "\r\x1b[2K> {text}").and_then(|()| self.out.flush());
                if let Err(err) = result {
                    replay_warn!("Failed to write to terminal: {}", err);
                }
            }
            Frame::Progress { message, .. } => self.write_line(&format!("  {message}")),
            Frame::Success => self.write_line("  Done! Redirecting..."),
        }
    }

    fn show_share_link(&mut self, url: &str) {
        self.share_link = Some(url.to_string());
        self.write_line(url);
    }

    fn focus_query(&mut self) {
        self.focus_requested = true;
    }

    fn navigate(&mut self, url: &str) {
        self.navigated_to = Some(url.to_string());
        self.write_line(&format!("-> {url}"));
    }
}
