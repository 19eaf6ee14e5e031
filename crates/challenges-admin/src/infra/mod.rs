pub mod api;
pub mod images;
pub mod session;

pub use api::{ApiClient, ChallengeApi, Error};
pub use images::{badge_upload_from_file, get_image_mime_type};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore, TOKEN_KEY};
