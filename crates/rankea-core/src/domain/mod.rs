pub mod album;
pub mod draft;
pub mod form;
pub mod ids;
pub mod release_type;
pub mod score;
pub mod song;
pub mod sort;

pub use album::Album;
pub use draft::{AlbumDraft, AlbumPayload, DraftError};
pub use form::{AlbumField, FormMode, RankingForm, SongField, MAX_SONG_ROWS};
pub use ids::AlbumId;
pub use release_type::ReleaseType;
pub use score::Aggregate;
pub use song::SongEntry;
pub use sort::{SortKey, SortOrder};
