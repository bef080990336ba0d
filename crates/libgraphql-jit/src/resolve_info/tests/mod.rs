mod response_path_tests;
