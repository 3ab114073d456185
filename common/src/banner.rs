use std::io;

use anyhow::*;

// The decorative startup banner. The runtime never constructs one itself;
// an implementation is supplied by a separately built module (or by a test).
// What it writes is up to the implementation, but it must write the same
// bytes on every call.
pub trait Banner {
	fn render(&self, out: &mut dyn io::Write) -> Result<()>;
}
