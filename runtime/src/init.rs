fn init_(is_test: bool, default: &'static str) {
	let env = env_logger::Env::new().default_filter_or(default);
	env_logger::builder()
		.is_test(is_test)
		.parse_env(env)
		.init();
}

pub fn init(verbose: bool) {
	init_(false, if verbose { "debug" } else { "info" })
}

#[cfg(test)]
pub fn init_for_tests() {
	init_(true, "debug")
}
