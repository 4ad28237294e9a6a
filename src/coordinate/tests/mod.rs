mod latitude_tests;
mod longitude_tests;
