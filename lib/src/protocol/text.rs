use chrono::{Local, TimeZone};

pub const LINE_ENDING: &str = "\r\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.text.push_str(line.as_ref());
        self.text.push_str(LINE_ENDING);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.text.push_str(LINE_ENDING);
        self
    }

    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

pub fn format_clock(epoch_ms: u64) -> String {
    i64::try_from(epoch_ms)
        .ok()
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| String::from("--:--:--"))
}
