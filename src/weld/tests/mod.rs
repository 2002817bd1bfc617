mod dedup_property_tests;
