mod answer_service_test;
mod upload_service_test;
