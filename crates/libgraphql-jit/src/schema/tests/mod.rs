mod type_oracle_tests;
