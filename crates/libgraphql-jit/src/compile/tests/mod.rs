mod compiled_query_tests;
