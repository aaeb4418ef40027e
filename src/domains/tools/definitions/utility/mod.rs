//! General utility tools.

pub mod ip_info;
pub mod notepad;
pub mod password;
pub mod qr_code;
pub mod stopwatch;
pub mod url_shortener;

pub use ip_info::{IpInfoParams, IpInfoTool};
pub use notepad::{NotepadAction, NotepadParams, NotepadTool};
pub use password::{PasswordGeneratorParams, PasswordGeneratorTool};
pub use qr_code::{QrCodeParams, QrCodeTool};
pub use stopwatch::{Stopwatch, StopwatchAction, StopwatchParams, StopwatchTool};
pub use url_shortener::{UrlShortenerParams, UrlShortenerTool};
