/*!
 * # srtconv - subtitle track converter
 *
 * A Rust library and command-line tool for reshaping timestamped subtitle
 * tracks in a translation workflow.
 *
 * ## Features
 *
 * - Strict parsing of `index / HH:MM:SS,mmm --> HH:MM:SS,mmm / text / blank` blocks
 * - Timeline gap removal with tolerance-based overlap repair
 * - Output as a debug dump, a flat text transcript, or a subtitle track
 * - Import of `M:SS text` video transcripts into subtitle tracks
 *
 * ## Architecture
 *
 * Data flows one way: text → `subtitle_processor` → `timeline` → `emitters` → text.
 * - `timecode`: timecode ⇄ seconds conversion
 * - `subtitle_processor`: entry model and block parser
 * - `timeline`: gap removal and overlap repair
 * - `emitters`: output renderers
 * - `transcript`: transcript import
 * - `app_config`: configuration
 * - `file_utils`: file reading and atomic writes
 * - `app_controller`: one conversion run end to end
 * - `errors`: error types
 *
 * ## License
 *
 * This project is licensed under the BSD 3-Clause License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod emitters;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod timecode;
pub mod timeline;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use emitters::OutputMode;
pub use errors::{EmptyInputError, FormatError, ParseError, ParseErrorKind, SubtitleError, TimelineError};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use timecode::{format_timecode, parse_timecode, TimeRange};
pub use timeline::{TimelinePolicy, TimelineRepair, DEFAULT_TOLERANCE_SECS};
