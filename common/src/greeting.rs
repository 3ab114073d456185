// The two build-time substitutions, fixed before program start and
// immutable for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Greeting {
	pub greeting: String,
	pub version: String,
}

impl Greeting {
	pub fn new<G: ToString, V: ToString>(greeting: G, version: V) -> Self {
		Self { greeting: greeting.to_string(), version: version.to_string() }
	}

	// The greeting line itself, blank-line prefixed. The banner is not
	// part of this; the runtime writes it separately, first.
	pub fn line(&self) -> String {
		format!("\n{} from {}!\n", self.greeting, self.version)
	}
}
