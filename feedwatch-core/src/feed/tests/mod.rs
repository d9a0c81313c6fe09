mod slot_tests;
mod support;
