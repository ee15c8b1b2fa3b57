//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Copied, LuChevronDown as SortDesc, LuChevronUp as SortAsc,
        LuChevronsUpDown as SortNone, LuDownload as Download, LuFolderOpen as Folder,
        LuRadio as Live, LuRefreshCw as Polling, LuSearch as Search, LuWifiOff as Offline,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Polling, BsBroadcast as Live, BsCaretDownFill as SortDesc,
        BsCaretUpFill as SortAsc, BsCheckLg as Copied, BsChevronExpand as SortNone,
        BsDownload as Download, BsFolder2Open as Folder, BsSearch as Search,
        BsWifiOff as Offline,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(SEARCH, Search);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(SORT_NONE, SortNone);
themed_icon!(COPIED, Copied);
themed_icon!(LIVE, Live);
themed_icon!(POLLING, Polling);
themed_icon!(OFFLINE, Offline);
