mod api_client_test;
mod editor_test;
mod managers_test;
