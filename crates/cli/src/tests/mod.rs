mod group_tests;
