mod lexer_name_tests;
mod lexer_number_tests;
mod lexer_property_tests;
mod lexer_tests;
mod utils;
