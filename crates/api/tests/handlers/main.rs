mod test_utils;

mod appointment_test;
mod catalogue_test;
mod health_test;
mod middleware_test;
mod user_test;
