use std::io;

use anyhow::*;
use log::*;

use pyhello_common::banner::Banner;
use pyhello_common::greeting::Greeting;

// Banner first, then the greeting line. A banner that can't render must
// not take the greeting down with it; losing the greeting line itself is
// an error.
pub fn greet(greeting: &Greeting, banner: &dyn Banner, out: &mut dyn io::Write) -> Result<()> {
	debug!("rendering banner");
	if let Err(e) = banner.render(out) {
		warn!("banner failed to render: {:?}", e);
	}
	debug!("writing greeting line");
	out.write_all(greeting.line().as_bytes())?;
	out.flush()?;
	Ok(())
}
