use std::io;

use anyhow::*;

use pyhello_common::banner::Banner;

// Banner which writes a fixed marker, for asserting ordering.
pub struct MarkerBanner(pub &'static str);

impl Banner for MarkerBanner {
	fn render(&self, out: &mut dyn io::Write) -> Result<()> {
		out.write_all(self.0.as_bytes())?;
		Ok(())
	}
}

// Banner which fails without writing anything.
pub struct BrokenBanner;

impl Banner for BrokenBanner {
	fn render(&self, _out: &mut dyn io::Write) -> Result<()> {
		Err(anyhow!("banner unavailable"))
	}
}

// Writer which rejects every write.
pub struct RejectWriter;

impl io::Write for RejectWriter {
	fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
		Err(io::Error::new(io::ErrorKind::BrokenPipe, "rejected"))
	}

	fn flush(&mut self) -> io::Result<()> {
		std::result::Result::Ok(())
	}
}
