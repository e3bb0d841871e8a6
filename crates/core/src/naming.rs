//! Output filename rules for obfuscated downloads.

/// Prefix applied to the source name when no output name was requested.
pub const OUTPUT_PREFIX: &str = "obfuscated_";

/// Suffixes accepted as-is (compared case-insensitively).
const ACCEPTED_SUFFIXES: &[&str] = &[".lua", ".txt"];

/// Suffix appended when the name carries none of [`ACCEPTED_SUFFIXES`].
const DEFAULT_SUFFIX: &str = ".lua";

/// Derive the download filename for a submission.
///
/// Uses `requested` when given, otherwise `obfuscated_{source_name}`.
/// If the result does not end in `.lua` or `.txt` (any case), `.lua` is
/// appended once.
///
/// # Examples
///
/// ```
/// use xevic_core::naming::output_filename;
///
/// assert_eq!(output_filename("test.lua", None), "obfuscated_test.lua");
/// assert_eq!(output_filename("pasted_script.lua", Some("out")), "out.lua");
/// assert_eq!(output_filename("a.lua", Some("NOTES.TXT")), "NOTES.TXT");
/// assert_eq!(output_filename("script.js", None), "obfuscated_script.js.lua");
/// ```
pub fn output_filename(source_name: &str, requested: Option<&str>) -> String {
    let mut name = match requested {
        Some(requested) => requested.to_string(),
        None => format!("{OUTPUT_PREFIX}{source_name}"),
    };

    let lowered = name.to_lowercase();
    if !ACCEPTED_SUFFIXES.iter().any(|suffix| lowered.ends_with(suffix)) {
        name.push_str(DEFAULT_SUFFIX);
    }

    name
}
