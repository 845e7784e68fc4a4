mod helpers;

mod concurrency_tests;
