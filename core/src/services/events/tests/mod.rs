mod publisher_tests;
