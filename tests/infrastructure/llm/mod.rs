mod hugging_face_client_test;
