use std::io::{self, Write};

use log::{trace, warn};

/// Builds the greeting text for `name`, without a line terminator.
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Writes the greeting for `name` followed by a newline to `out`.
pub fn write_greeting<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "{}", greeting(name))
}

/// Prints the greeting for `name` to stdout.
///
/// The name is used verbatim, so an empty name prints `Hello, !`. A failed
/// write (e.g. a closed pipe) is logged and otherwise ignored.
pub fn greet(name: &str) {
    greet_into(&mut io::stdout().lock(), name);
}

fn greet_into<W: Write>(out: &mut W, name: &str) {
    trace!("greeting {:?}", name);
    if let Err(e) = write_greeting(out, name).and_then(|()| out.flush()) {
        warn!("Failed to write greeting: {}", e);
    }
}
