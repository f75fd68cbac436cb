mod connection_tests;
mod template_repository_tests;
