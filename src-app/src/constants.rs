//! Host constants

/// Data storage paths
pub mod paths {
    /// Environment variable overriding the data directory
    pub const DATA_DIR_ENV: &str = "PROMPTHUB_DATA_DIR";
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "prompthub";
    /// Config file name inside the data directory
    pub const CONFIG_FILE: &str = "config.json";
}

/// Values used by the scripted walkthrough
pub mod walkthrough {
    pub const EMAIL: &str = "neo@prompthub.dev";
    pub const NICKNAME: &str = "neo";
    pub const PASSWORD: &str = "abcd1234";
    pub const CODE: &str = "123456";
    /// Countdown ticks to observe before verifying
    pub const TICKS_TO_WATCH: usize = 2;
}
