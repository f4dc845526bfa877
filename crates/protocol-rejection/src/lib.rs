pub mod dispatch;
pub mod error;
pub mod message;
pub mod report;

pub use dispatch::{find_rejection, is_rejection};
pub use error::{ErrorKind, ProtocolError, ProtocolResult, RejectionError};
pub use message::RejectionMessage;
pub use report::{report_error, report_rejection};
