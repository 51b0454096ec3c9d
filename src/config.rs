//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use crate::models::{Project, ScriptResource};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Simulated `ls -la` output for `ls`/`dir`.
pub const LISTING_TEXT: &str = include_str!("../assets/text/listing.txt");

/// Profile block for `whoami`.
pub const PROFILE_TEXT: &str = include_str!("../assets/text/profile.txt");

/// Contact block for `contact`.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Host label rendered in the prompt's top line.
pub const HOST_LABEL: &str = "root@Jerr";

/// Home directory of the simulated shell.
pub const HOME_PATH: &str = "~";

/// Appended to the localized greeting on first open.
pub const WELCOME_SUFFIX: &str = "Bem-vindo ao meu portfólio.";

/// Corner note shown before the visitor's locale is known.
pub const CORNER_NOTE: &str = "echo \"Olá, recrutador!\"";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Timeout for the remote command fallback in milliseconds.
pub const REMOTE_TIMEOUT_MS: i32 = 4500;

/// Public address lookup returning `{ "ip": "..." }`.
pub const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

/// Geolocation lookup returning `languages` / `country_code`.
pub const GEO_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Path appended to the configured remote fallback base.
pub const REMOTE_API_PATH: &str = "/api/terminal";

/// `<html>` data attribute holding the remote fallback base URL.
pub const REMOTE_BASE_ATTRIBUTE: &str = "data-terminal-api-base";

/// Global `window` property holding the remote fallback base URL.
pub const REMOTE_BASE_GLOBAL: &str = "TERMINAL_API_BASE";

/// Build-time fallback for the remote base URL.
pub const REMOTE_BASE_BUILD: Option<&str> = option_env!("TERMINAL_API_BASE");

// =============================================================================
// Persisted Preferences
// =============================================================================

/// localStorage keys.
pub mod prefs {
    pub const HIDDEN_KEY: &str = "terminalHidden";
    pub const SOUND_ENABLED_KEY: &str = "terminalSoundEnabled";
    pub const SOUND_VOLUME_KEY: &str = "terminalSoundVolume";
    pub const SOUND_INTENSITY_KEY: &str = "terminalSoundIntensity";
}

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of transcript lines to keep.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Line replayed by the replay control.
pub const REPLAY_COMMAND: &str = "ls -la";

/// Badge timestamp refresh interval.
pub const BADGE_REFRESH_MS: u32 = 60_000;

// =============================================================================
// Animation Configuration
// =============================================================================

/// Rain animation defaults. See `RainConfig` and `RainParams`.
pub mod animation {
    /// Duration of the `curl` animation.
    pub const CURL_DURATION_MS: u32 = 6000;
    /// Duration of the `cmatrix` animation.
    pub const CMATRIX_DURATION_MS: u32 = 12000;
    /// Duration used by the `curl` quick-action button.
    pub const CURL_BUTTON_DURATION_MS: u32 = 7000;

    /// Glyph height in CSS pixels; also the row height.
    pub const GLYPH_SIZE: f64 = 14.0;
    /// Horizontal advance per glyph as a fraction of `GLYPH_SIZE`.
    pub const GLYPH_ADVANCE: f64 = 0.6;

    pub const BACKGROUND: &str = "#00110a";
    /// Glyph color as RGB; alpha varies along the trail.
    pub const INK: (u8, u8, u8) = (0, 255, 102);
    pub const FONT_FAMILY: &str = "\"Fira Code\", monospace";

    /// Letters and digits.
    pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    /// Letters, digits and punctuation for the intensified variant.
    pub const ALPHABET_EXTENDED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,:;!@#$%&*()-+=/\\|<>?[]{}~";

    pub const SPEED_MIN: f64 = 1.0;
    pub const SPEED_SPREAD: f64 = 3.0;
    pub const CMATRIX_SPEED_MULTIPLIER: f64 = 2.0;

    /// Interval between layout polls while the surface is not yet sized.
    pub const POLL_INTERVAL_MS: u32 = 200;
    /// Number of polls before giving up.
    pub const MAX_POLL_ATTEMPTS: u32 = 12;
    /// Minimum width and height for a usable surface.
    pub const MIN_EXTENT: f64 = 20.0;

    /// Distance past the right edge before a stream wraps.
    pub const WRAP_MARGIN: f64 = 50.0;
    /// Random extra offset applied when a stream respawns.
    pub const RESPAWN_SPREAD: f64 = 200.0;
    /// Glyphs outside the surface by more than this are skipped.
    pub const CLIP_MARGIN: f64 = 20.0;

    pub const TRAIL_MIN: usize = 6;
    pub const TRAIL_SPREAD: usize = 12;
    pub const ALPHA_STEP: f64 = 0.12;
    pub const ALPHA_FLOOR: f64 = 0.08;

    /// Baseline offset for glyphs within their row.
    pub const BASELINE_INSET: f64 = 4.0;
    /// Left inset of the completion message.
    pub const MESSAGE_INSET: f64 = 8.0;
    pub const COMPLETION_MESSAGE: &str = "-- animação finalizada --";
}

// =============================================================================
// Sound Configuration
// =============================================================================

/// Audio cue defaults.
pub mod sound {
    /// Sounds only play during this window after an animation starts.
    pub const WINDOW_MS: f64 = 3000.0;
    pub const DEFAULT_VOLUME: f64 = 0.02;
    /// Per-stream cue probability before `CUE_SCALE` is applied.
    pub const DEFAULT_INTENSITY: f64 = 0.15;
    pub const CUE_SCALE: f64 = 0.08;

    pub const FREQ_MIN_HZ: f32 = 400.0;
    pub const FREQ_SPREAD_HZ: f32 = 1600.0;
    pub const CUTOFF_MIN_HZ: f32 = 800.0;
    pub const CUTOFF_SPREAD_HZ: f32 = 2200.0;
    /// Gain ramp target and timings, in seconds.
    pub const RAMP_FLOOR: f32 = 0.001;
    pub const RAMP_SECS: f64 = 0.10;
    pub const STOP_SECS: f64 = 0.12;
}

// =============================================================================
// Localization
// =============================================================================

/// Greeting used when no locale can be matched.
pub const DEFAULT_GREETING: &str = "Hola!_yo_Soy_Jerr";

/// Two-letter code to greeting.
pub const GREETINGS: &[(&str, &str)] = &[
    ("es", "Hola!_yo_Soy_Jerr"),
    ("pt", "Olá!_eu_Sou_Jerr"),
    ("en", "Hello!_I_am_Jerr"),
    ("zh", "你好！我是Jerr"),
    ("ru", "Привет!_Я_Jerr"),
    ("fr", "Bonjour!_Je_Suis_Jerr"),
    ("de", "Hallo!_Ich_Bin_Jerr"),
];

// =============================================================================
// Content
// =============================================================================

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Análise de Dados (Banco-de-teste-BIG_DATA)",
        description: "pipelines CSV/PDF, análises e dashboards",
        reference: Some("https://github.com/Ramaswr/Banco-de-teste-BIG_DATA"),
    },
    Project {
        title: "Portfólio (Meu-Portfolio)",
        description: "terminal interativo, documentação e automação do HLD",
        reference: Some("https://github.com/Ramaswr/Meu-Portfolio"),
    },
    Project {
        title: "Scripts forenses",
        description: "coletores somente leitura para Linux, macOS e Windows",
        reference: None,
    },
];

/// Demonstration scripts shown by `scripts` and `cat`. Never executed.
pub const SCRIPTS: &[ScriptResource] = &[
    ScriptResource {
        key: "forensics-linux",
        title: "collect_forensics_linux.sh",
        description: "Coleta informações forenses básicas em Linux.",
        aliases: &["collect_forensics_linux.sh", "collect_forensics_linux"],
        content: include_str!("../assets/scripts/collect_forensics_linux.sh"),
    },
    ScriptResource {
        key: "forensics-macos",
        title: "collect_forensics_macos.sh",
        description: "Coleta informações forenses em macOS.",
        aliases: &["collect_forensics_macos.sh", "collect_forensics_macos"],
        content: include_str!("../assets/scripts/collect_forensics_macos.sh"),
    },
    ScriptResource {
        key: "forensics-linux-zip",
        title: "collect_forensics_linux_zip.sh",
        description: "Coleta dados em Linux e compacta em ZIP.",
        aliases: &["collect_forensics_linux_zip.sh", "collect_forensics_linux_zip"],
        content: include_str!("../assets/scripts/collect_forensics_linux_zip.sh"),
    },
    ScriptResource {
        key: "forensics-linux-home",
        title: "collect_forensics_linux_home.sh",
        description: "Coleta forense em Linux salvando em $HOME.",
        aliases: &[
            "collect_forensics_linux_home.sh",
            "collect_forensics_linux_home",
        ],
        content: include_str!("../assets/scripts/collect_forensics_linux_home.sh"),
    },
    ScriptResource {
        key: "block-ip-ps1",
        title: "block-ip.ps1",
        description: "Powershell para bloquear IPs no firewall.",
        aliases: &["block-ip.ps1", "block-ip-ps1", "block-ip"],
        content: include_str!("../assets/scripts/block-ip.ps1"),
    },
    ScriptResource {
        key: "block-ip-bat",
        title: "block-ip.bat",
        description: "Batch para bloquear IPs usando netsh.",
        aliases: &["block-ip.bat", "block-ip-bat"],
        content: include_str!("../assets/scripts/block-ip.bat"),
    },
];
