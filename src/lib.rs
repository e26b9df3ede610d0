// Library root
// -----------
// The binary (`main.rs`) wires these modules together for one upload.
//
// Module responsibilities:
// - `options`: flag and environment parsing, plus the required-value
//   check that yields validated `UploadOptions`.
// - `slack`: the blocking `files.upload` client and its error taxonomy.
// - `ui`: terminal output for missing options (usage and red diagnostics).
pub mod options;
pub mod slack;
pub mod ui;
