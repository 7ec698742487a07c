pub mod load;
pub mod save;
pub mod types;

pub use types::{
    Config, DEFAULT_BATCH_SIZE, DEFAULT_VIDEO_EXTENSIONS, ExtensionSet, MAX_RECENT_PATHS,
    NamingScheme, SortOrder, UserSettings,
};
