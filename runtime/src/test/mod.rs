// test utilities
mod util;


#[ctor::ctor]
fn init() {
	crate::init::init_for_tests();
}
