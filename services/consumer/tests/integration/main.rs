mod client_test;
mod helpers;
