mod framing;
mod ids;
mod text;

pub use framing::{MAX_LINE_BYTES, ProtocolError, read_line, write_text};
pub use ids::SessionId;
pub use text::{LINE_ENDING, Transcript, format_clock};
