use std::fmt::Display;

/// Name greeted by the binary when none is given on the command line.
pub const DEFAULT_NAME: &str = "World";

/// Build the greeting for `name`.
///
/// The name is substituted verbatim through its `Display` rendering; no
/// trimming or validation is applied.
pub fn greet(name: impl Display) -> String {
    format!("Hello, {}! Greetings from the common module.", name)
}
