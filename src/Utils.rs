//! different utility modules used throughout the project
/// terminal and file logging (simplelog)
pub mod logger;
/// wall-clock timing of the three sums
pub mod timer;
/// checks on integrand, interval and refinement entered by the user
pub mod validation;
/// text file with previously integrated functions and their intervals
pub mod function_log;
/// table with sums and timings printed after every integration
pub mod report;
/// parse settings document with structure like " title1 key1: value1 title2 key2: value2" into AppSettings
pub mod settings;
