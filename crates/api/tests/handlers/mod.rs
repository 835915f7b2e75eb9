mod config_test;
mod directory_test;
mod interviews_test;
mod middleware_test;
mod slots_test;
mod store_failure_test;
