use std::io;

use anyhow::*;
use pyhello_common::banner::Banner;

const PRETTY: &str = r"
 ____        _           _ _     _
|  _ \ _   _| |__  _   _(_) | __| |
| |_) | | | | '_ \| | | | | |/ _` |
|  __/| |_| | |_) | |_| | | | (_| |
|_|    \__, |_.__/ \__,_|_|_|\__,_|
       |___/
";

// Default banner provided to the runtime. Stateless; the rendered text is
// fixed at compile time.
pub struct PrettyBanner;

impl Banner for PrettyBanner {
	fn render(&self, out: &mut dyn io::Write) -> Result<()> {
		out.write_all(PRETTY.as_bytes())?;
		Ok(())
	}
}
