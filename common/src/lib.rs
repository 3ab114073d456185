// Contract shared by the runtime and provided modules
pub mod banner;
pub mod greeting;
