mod field_expansion_tests;
