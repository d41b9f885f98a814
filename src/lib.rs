pub mod api;
pub mod drafts;
pub mod error;
pub mod format;
pub mod inherit;
pub mod matcher;
pub mod node;

pub use api::{parse_dtcg, DtcgParserConfig, ParsedNode};
pub use drafts::{DTCG_FIRST_DRAFT, DTCG_LATEST_DRAFT};
pub use error::DtcgError;
pub use format::FormatProfile;
pub use inherit::prefer_own_value;
pub use matcher::{extract_properties, PropertyBag, PropertyMatcher};
