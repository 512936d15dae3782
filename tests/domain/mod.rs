mod extraction_request_test;
mod flash_status_test;
