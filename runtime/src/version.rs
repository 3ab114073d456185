use lazy_static::lazy_static;

use pyhello_common::greeting::Greeting;

// Build-time substitutions. The build tooling may override the greeting
// word by exporting PYHELLO_GREETING when compiling this crate.
pub const GREETING: &str = match option_env!("PYHELLO_GREETING") {
	Some(greeting) => greeting,
	None => "Hello",
};

lazy_static! {
	pub static ref VERSION: String = format!("Pybuild v{}", env!("CARGO_PKG_VERSION"));
}

pub fn default_greeting() -> Greeting {
	Greeting::new(GREETING, VERSION.as_str())
}
