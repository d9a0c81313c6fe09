mod classifier_tests;
mod color_tests;
